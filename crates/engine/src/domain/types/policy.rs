use serde::{Deserialize, Serialize};

use crate::domain::catalog::default_ekus;
use crate::domain::error::{PolicyError, PolicyResult};

use super::config::PolicyDefaults;
use super::purpose::ExtKeyUsage;

/// Key Usage / Extended Key Usage policy for document-signing certificates.
///
/// `Default` is the empty policy: no Digital Signature requirement and no
/// accepted purposes, so only `anyExtendedKeyUsage` passes the EKU check.
/// Use [`PolicyConfig::secure_default`] for the recommended policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// The Digital Signature KU bit must be set.
    pub require_digital_signature_ku: bool,
    /// Content Commitment (non-repudiation) is acceptable. Observed only; it
    /// does not change the outcome.
    pub allow_non_repudiation_ku: bool,
    /// Preferred purposes. Any match gives a clean EKU pass.
    pub required_ekus: Vec<ExtKeyUsage>,
    /// Acceptable fallback purposes.
    pub allowed_ekus: Vec<ExtKeyUsage>,
}

impl PolicyConfig {
    /// Secure opinionated defaults built from the default EKU catalog:
    /// Document Signing is required, Email Protection and Client
    /// Authentication are allowed. `anyExtendedKeyUsage` is left out of both
    /// lists so it keeps producing the permissive-usage warning.
    pub fn secure_default() -> Self {
        let catalog = default_ekus();
        let split = PolicyDefaults::REQUIRED_CATALOG_ENTRIES.min(catalog.len());
        Self {
            require_digital_signature_ku: PolicyDefaults::REQUIRE_DIGITAL_SIGNATURE_KU,
            allow_non_repudiation_ku: PolicyDefaults::ALLOW_NON_REPUDIATION_KU,
            required_ekus: catalog[..split].to_vec(),
            allowed_ekus: catalog[split..].iter().filter(|eku| !eku.is_any()).cloned().collect(),
        }
    }

    /// Load a policy from raw JSON bytes. Missing fields take their `Default`
    /// values; EKU entries may be dotted OIDs or known purpose names.
    pub fn from_json(bytes: &[u8]) -> PolicyResult<Self> {
        let cfg: PolicyConfig = serde_json::from_slice(bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// A purpose cannot be both preferred and merely allowed.
    pub fn validate(&self) -> PolicyResult<()> {
        if let Some(dup) = self.required_ekus.iter().find(|eku| self.allowed_ekus.contains(eku)) {
            return Err(PolicyError::Config(format!(
                "{dup} is listed in both required_ekus and allowed_ekus"
            )));
        }
        Ok(())
    }

    pub fn is_required(&self, eku: &ExtKeyUsage) -> bool {
        self.required_ekus.contains(eku)
    }

    pub fn is_allowed(&self, eku: &ExtKeyUsage) -> bool {
        self.allowed_ekus.contains(eku)
    }
}
