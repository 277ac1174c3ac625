// crates/engine/src/lib.rs

//! Public facade for the document-signing usage policy engine.
//! Judges a certificate's Key Usage and Extended Key Usage against a policy
//! and reports both outcomes for the surrounding verification pipeline.

pub mod adapters;
pub mod domain;

/// Evaluate usage attributes against a policy. Never fails.
pub fn evaluate(usage: &CertificateUsage, policy: &PolicyConfig) -> Decision {
    domain::evaluator::evaluate(usage, policy)
}

/// Recommended EKU purposes in order of preference.
pub fn default_ekus() -> &'static [ExtKeyUsage] {
    domain::catalog::default_ekus()
}

/// Extract usage from a certificate parsed by `x509-parser` and evaluate it.
#[cfg(feature = "x509")]
pub fn evaluate_certificate(
    cert: &x509_parser::certificate::X509Certificate<'_>,
    policy: &PolicyConfig,
) -> PolicyResult<Decision> {
    let usage = adapters::x509::usage_from_certificate(cert)?;
    Ok(evaluate(&usage, policy))
}

// Re-exports for convenience
pub use domain::decision::{Decision, Diagnostic, DiagnosticKind, Severity, UsageCheck};
pub use domain::error::{PolicyError, PolicyResult};
pub use domain::evaluator::{check_extended_key_usage, check_key_usage};
pub use domain::types::{
    CertificateUsage, ExtKeyUsage, KeyUsage, KeyUsageFlags, PolicyConfig, PolicyDefaults, Purpose,
    DOCUMENT_SIGNING,
};
pub use domain::usage_policy::UsagePolicy;
