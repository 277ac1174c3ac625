use docsign_usage as du;
use docsign_usage::domain::decision as dd;
use docsign_usage::domain::types as dt;

uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("{message}")]
    Generic { message: String },
}

impl From<du::PolicyError> for FfiError {
    fn from(e: du::PolicyError) -> Self {
        FfiError::Generic {
            message: e.to_string(),
        }
    }
}

fn parse_ekus(oids: Vec<String>) -> Result<Vec<dt::ExtKeyUsage>, FfiError> {
    oids.iter()
        .map(|s| s.parse::<dt::ExtKeyUsage>().map_err(FfiError::from))
        .collect()
}

fn eku_oids(ekus: &[dt::ExtKeyUsage]) -> Vec<String> {
    ekus.iter().map(|e| e.oid().to_string()).collect()
}

// ===== FFI types mirroring the public Rust API (FFI-friendly) =====

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiCertificateUsage {
    pub key_usage_bits: u16,          // bit 0 = digitalSignature
    pub ext_key_usages: Vec<String>,  // EKU OIDs or known names
}

impl TryFrom<FfiCertificateUsage> for dt::CertificateUsage {
    type Error = FfiError;
    fn try_from(v: FfiCertificateUsage) -> Result<Self, Self::Error> {
        Ok(dt::CertificateUsage {
            key_usage: dt::KeyUsage::from_bits_truncate(v.key_usage_bits),
            ext_key_usage: parse_ekus(v.ext_key_usages)?,
        })
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiPolicyConfig {
    pub require_digital_signature_ku: bool,
    pub allow_non_repudiation_ku: bool,
    pub required_ekus: Vec<String>,
    pub allowed_ekus: Vec<String>,
}

impl TryFrom<FfiPolicyConfig> for dt::PolicyConfig {
    type Error = FfiError;
    fn try_from(v: FfiPolicyConfig) -> Result<Self, Self::Error> {
        let cfg = dt::PolicyConfig {
            require_digital_signature_ku: v.require_digital_signature_ku,
            allow_non_repudiation_ku: v.allow_non_repudiation_ku,
            required_ekus: parse_ekus(v.required_ekus)?,
            allowed_ekus: parse_ekus(v.allowed_ekus)?,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl From<dt::PolicyConfig> for FfiPolicyConfig {
    fn from(v: dt::PolicyConfig) -> Self {
        FfiPolicyConfig {
            require_digital_signature_ku: v.require_digital_signature_ku,
            allow_non_repudiation_ku: v.allow_non_repudiation_ku,
            required_ekus: eku_oids(&v.required_ekus),
            allowed_ekus: eku_oids(&v.allowed_ekus),
        }
    }
}

// ===== Decision mappings =====

#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDiagnosticKind {
    MissingDigitalSignature,
    NoExtendedKeyUsage,
    NotPreferredExtendedKeyUsage,
    PermissiveExtendedKeyUsage,
    UnsuitableExtendedKeyUsage,
}

impl From<dd::DiagnosticKind> for FfiDiagnosticKind {
    fn from(v: dd::DiagnosticKind) -> Self {
        use dd::DiagnosticKind as K;
        match v {
            K::MissingDigitalSignature => FfiDiagnosticKind::MissingDigitalSignature,
            K::NoExtendedKeyUsage => FfiDiagnosticKind::NoExtendedKeyUsage,
            K::NotPreferredExtendedKeyUsage => FfiDiagnosticKind::NotPreferredExtendedKeyUsage,
            K::PermissiveExtendedKeyUsage => FfiDiagnosticKind::PermissiveExtendedKeyUsage,
            K::UnsuitableExtendedKeyUsage => FfiDiagnosticKind::UnsuitableExtendedKeyUsage,
        }
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiDiagnostic {
    pub kind: FfiDiagnosticKind,
    pub message: String,
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiUsageCheck {
    pub valid: bool,
    pub diagnostic: Option<FfiDiagnostic>,
}

impl From<&dd::UsageCheck> for FfiUsageCheck {
    fn from(v: &dd::UsageCheck) -> Self {
        FfiUsageCheck {
            valid: v.is_valid(),
            diagnostic: v
                .diagnostic()
                .map(|d| FfiDiagnostic { kind: d.kind.into(), message: d.message.clone() }),
        }
    }
}

#[derive(uniffi::Record, Debug, Clone)]
pub struct FfiDecision {
    pub key_usage: FfiUsageCheck,
    pub extended_key_usage: FfiUsageCheck,
}

impl From<dd::Decision> for FfiDecision {
    fn from(v: dd::Decision) -> Self {
        FfiDecision {
            key_usage: (&v.key_usage).into(),
            extended_key_usage: (&v.extended_key_usage).into(),
        }
    }
}

// ===== High-level API, mirroring Rust surface =====

#[uniffi::export]
pub fn evaluate_usage_ffi(
    usage: FfiCertificateUsage,
    policy: FfiPolicyConfig,
) -> Result<FfiDecision, FfiError> {
    let usage: dt::CertificateUsage = usage.try_into()?;
    let policy: dt::PolicyConfig = policy.try_into()?;
    Ok(du::evaluate(&usage, &policy).into())
}

#[uniffi::export]
pub fn default_ekus_ffi() -> Vec<String> {
    eku_oids(du::default_ekus())
}

#[uniffi::export]
pub fn secure_default_policy_ffi() -> FfiPolicyConfig {
    dt::PolicyConfig::secure_default().into()
}

#[uniffi::export]
pub fn policy_from_json_ffi(json: String) -> Result<FfiPolicyConfig, FfiError> {
    let cfg = dt::PolicyConfig::from_json(json.as_bytes())?;
    Ok(cfg.into())
}
