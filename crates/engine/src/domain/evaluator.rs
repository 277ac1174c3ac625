// crates/engine/src/domain/evaluator.rs

use log::{debug, trace};

use super::decision::{Decision, DiagnosticKind, UsageCheck};
use super::rules::{first_match, EkuFacts};
use super::types::{CertificateUsage, ExtKeyUsage, KeyUsage, KeyUsageFlags, PolicyConfig};

/// Key Usage check. Only the Digital Signature and Content Commitment bits
/// are looked at.
pub fn check_key_usage(key_usage: KeyUsage, policy: &PolicyConfig) -> UsageCheck {
    if policy.require_digital_signature_ku && !key_usage.contains(KeyUsageFlags::DigitalSignature) {
        debug!(
            "key usage rejected: digital signature bit missing (bits {:#06x})",
            key_usage.bits()
        );
        return UsageCheck::failed(DiagnosticKind::MissingDigitalSignature);
    }

    // TODO: decide whether an allowed content-commitment bit should annotate
    // the outcome or whether the option should go away.
    if policy.allow_non_repudiation_ku && key_usage.contains(KeyUsageFlags::ContentCommitment) {
        trace!("content commitment present and allowed; no effect on outcome");
    }

    UsageCheck::passed()
}

/// Extended Key Usage check via the ordered rule table.
pub fn check_extended_key_usage(ekus: &[ExtKeyUsage], policy: &PolicyConfig) -> UsageCheck {
    let facts = EkuFacts::gather(ekus, policy);
    let (rule, outcome) = first_match(&facts);
    debug!(
        "extended key usage decided by rule '{}' (valid={}, {} purposes)",
        rule.name(),
        outcome.is_valid(),
        ekus.len()
    );
    outcome
}

/// Run both checks. Always returns a decision.
pub fn evaluate(usage: &CertificateUsage, policy: &PolicyConfig) -> Decision {
    Decision {
        key_usage: check_key_usage(usage.key_usage, policy),
        extended_key_usage: check_extended_key_usage(&usage.ext_key_usage, policy),
    }
}
