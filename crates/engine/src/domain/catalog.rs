//! Default EKU catalog for document signing.

use super::types::ExtKeyUsage;

/// Recommended purposes, most preferred first:
/// - Document Signing (RFC 9336), the purpose defined for document/PDF signatures
/// - Email Protection, commonly issued by CAs in its place
/// - Client Authentication, another common alternative
/// - anyExtendedKeyUsage, last and for backward compatibility only
///
/// Order expresses preference, not exclusivity; callers decide how to split
/// it between required and allowed purposes.
pub static DEFAULT_EKUS: [ExtKeyUsage; 4] = [
    ExtKeyUsage::DocumentSigning,
    ExtKeyUsage::EmailProtection,
    ExtKeyUsage::ClientAuth,
    ExtKeyUsage::Any,
];

pub fn default_ekus() -> &'static [ExtKeyUsage] {
    &DEFAULT_EKUS
}
