// crates/engine/src/domain/decision.rs
use std::fmt;

use serde::Serialize;

/// Whether a diagnostic explains a rejection or only qualifies an acceptance.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Failure,
    Warning,
}

/// Machine-readable reason attached to a usage check.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingDigitalSignature,
    NoExtendedKeyUsage,
    NotPreferredExtendedKeyUsage,
    PermissiveExtendedKeyUsage,
    UnsuitableExtendedKeyUsage,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::MissingDigitalSignature => {
                "certificate does not have Digital Signature key usage"
            }
            DiagnosticKind::NoExtendedKeyUsage => "certificate has no Extended Key Usage extension",
            DiagnosticKind::NotPreferredExtendedKeyUsage => {
                "certificate uses acceptable but not preferred Extended Key Usage"
            }
            DiagnosticKind::PermissiveExtendedKeyUsage => {
                "certificate uses ExtKeyUsageAny which is too permissive for PDF signing"
            }
            DiagnosticKind::UnsuitableExtendedKeyUsage => {
                "certificate does not have suitable Extended Key Usage for PDF signing"
            }
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::MissingDigitalSignature
            | DiagnosticKind::NoExtendedKeyUsage
            | DiagnosticKind::UnsuitableExtendedKeyUsage => Severity::Failure,
            DiagnosticKind::NotPreferredExtendedKeyUsage
            | DiagnosticKind::PermissiveExtendedKeyUsage => Severity::Warning,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Structured diagnostic: a kind to match on plus the human-readable text.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl From<DiagnosticKind> for Diagnostic {
    fn from(kind: DiagnosticKind) -> Self {
        Diagnostic { kind, message: kind.message().to_string() }
    }
}

/// Outcome of one usage check (KU or EKU).
///
/// A failed check always carries a diagnostic. A passed check may carry a
/// warning.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct UsageCheck {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<Diagnostic>,
}

impl UsageCheck {
    pub fn passed() -> Self {
        Self { valid: true, diagnostic: None }
    }

    /// Outcome carrying `kind`. Validity follows the kind's severity, so a
    /// failure kind can never be reported as accepted.
    pub fn from_kind(kind: DiagnosticKind) -> Self {
        Self {
            valid: kind.severity() == Severity::Warning,
            diagnostic: Some(kind.into()),
        }
    }

    /// Accepted, with an advisory diagnostic.
    pub(crate) fn warning(kind: DiagnosticKind) -> Self {
        debug_assert_eq!(kind.severity(), Severity::Warning);
        Self::from_kind(kind)
    }

    pub(crate) fn failed(kind: DiagnosticKind) -> Self {
        debug_assert_eq!(kind.severity(), Severity::Failure);
        Self::from_kind(kind)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn kind(&self) -> Option<DiagnosticKind> {
        self.diagnostic.as_ref().map(|d| d.kind)
    }

    pub fn message(&self) -> Option<&str> {
        self.diagnostic.as_ref().map(|d| d.message.as_str())
    }

    pub fn is_warning(&self) -> bool {
        self.valid && self.diagnostic.is_some()
    }
}

/// KU and EKU outcomes, reported side by side. Combining them into an
/// accept/reject decision is left to the caller.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Decision {
    pub key_usage: UsageCheck,
    pub extended_key_usage: UsageCheck,
}

impl Decision {
    pub fn all_valid(&self) -> bool {
        self.key_usage.is_valid() && self.extended_key_usage.is_valid()
    }

    /// Advisory diagnostics from checks that passed.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        [&self.key_usage, &self.extended_key_usage]
            .into_iter()
            .filter(|check| check.is_warning())
            .filter_map(UsageCheck::diagnostic)
    }
}
