//! Ordered rule table for the Extended Key Usage check.
//!
//! Rules are evaluated top to bottom and the first rule whose predicate holds
//! decides the outcome. The last rule always applies.

use super::decision::{DiagnosticKind, UsageCheck};
use super::types::{ExtKeyUsage, PolicyConfig};

/// What the EKU rules need to know about a certificate, gathered once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EkuFacts {
    /// The certificate declares no EKU purposes.
    pub is_empty: bool,
    /// Some declared purpose is in `required_ekus`.
    pub has_required: bool,
    /// Some declared purpose is in `allowed_ekus`.
    pub has_allowed: bool,
    /// The certificate declares anyExtendedKeyUsage.
    pub has_any: bool,
    /// The policy lists at least one required purpose.
    pub policy_has_required: bool,
}

impl EkuFacts {
    pub fn gather(ekus: &[ExtKeyUsage], policy: &PolicyConfig) -> Self {
        Self {
            is_empty: ekus.is_empty(),
            has_required: ekus.iter().any(|eku| policy.is_required(eku)),
            has_allowed: ekus.iter().any(|eku| policy.is_allowed(eku)),
            has_any: ekus.iter().any(ExtKeyUsage::is_any),
            policy_has_required: !policy.required_ekus.is_empty(),
        }
    }
}

/// One rung of the EKU ladder.
#[derive(Clone, Copy)]
pub struct EkuRule {
    name: &'static str,
    applies: fn(&EkuFacts) -> bool,
    outcome: fn(&EkuFacts) -> UsageCheck,
}

impl std::fmt::Debug for EkuRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EkuRule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl EkuRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn applies(&self, facts: &EkuFacts) -> bool {
        (self.applies)(facts)
    }

    pub fn outcome(&self, facts: &EkuFacts) -> UsageCheck {
        (self.outcome)(facts)
    }
}

fn no_ekus(f: &EkuFacts) -> bool {
    f.is_empty
}

fn reject_no_ekus(_: &EkuFacts) -> UsageCheck {
    UsageCheck::failed(DiagnosticKind::NoExtendedKeyUsage)
}

fn has_required(f: &EkuFacts) -> bool {
    f.has_required
}

fn accept(_: &EkuFacts) -> UsageCheck {
    UsageCheck::passed()
}

fn has_allowed(f: &EkuFacts) -> bool {
    f.has_allowed
}

fn accept_allowed(f: &EkuFacts) -> UsageCheck {
    if f.policy_has_required {
        UsageCheck::warning(DiagnosticKind::NotPreferredExtendedKeyUsage)
    } else {
        UsageCheck::passed()
    }
}

fn has_any(f: &EkuFacts) -> bool {
    f.has_any
}

fn accept_permissive(_: &EkuFacts) -> UsageCheck {
    UsageCheck::warning(DiagnosticKind::PermissiveExtendedKeyUsage)
}

fn always(_: &EkuFacts) -> bool {
    true
}

fn reject_unsuitable(_: &EkuFacts) -> UsageCheck {
    UsageCheck::failed(DiagnosticKind::UnsuitableExtendedKeyUsage)
}

/// required > allowed > any > reject, after the empty-list short circuit.
pub static EKU_RULES: [EkuRule; 5] = [
    EkuRule { name: "no-extended-key-usage", applies: no_ekus, outcome: reject_no_ekus },
    EkuRule { name: "required-purpose", applies: has_required, outcome: accept },
    EkuRule { name: "allowed-purpose", applies: has_allowed, outcome: accept_allowed },
    EkuRule { name: "any-purpose", applies: has_any, outcome: accept_permissive },
    EkuRule { name: "unsuitable-purpose", applies: always, outcome: reject_unsuitable },
];

pub fn eku_rules() -> &'static [EkuRule] {
    &EKU_RULES
}

/// First rule that applies, with its outcome.
pub fn first_match(facts: &EkuFacts) -> (&'static EkuRule, UsageCheck) {
    let fallback = &EKU_RULES[EKU_RULES.len() - 1];
    let rule = EKU_RULES.iter().find(|r| r.applies(facts)).unwrap_or(fallback);
    (rule, rule.outcome(facts))
}
