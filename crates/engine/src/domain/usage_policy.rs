// crates/engine/src/domain/usage_policy.rs

use super::decision::Decision;
use super::evaluator;
use super::types::{CertificateUsage, PolicyConfig};

/// Anything that can judge a certificate's usage attributes.
/// `PolicyConfig` is the built-in implementation; pipelines can take
/// `&dyn UsagePolicy` to accept custom ones.
pub trait UsagePolicy {
    fn evaluate(&self, usage: &CertificateUsage) -> Decision;
}

impl UsagePolicy for PolicyConfig {
    fn evaluate(&self, usage: &CertificateUsage) -> Decision {
        evaluator::evaluate(usage, self)
    }
}
