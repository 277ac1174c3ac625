// adapters/x509.rs

use log::debug;
use x509_parser::certificate::X509Certificate;

use crate::domain::error::PolicyResult;
use crate::domain::types::{CertificateUsage, ExtKeyUsage, KeyUsage, KeyUsageFlags};

/// Extract usage attributes from a certificate already parsed by `x509-parser`.
///
/// A missing KU or EKU extension yields an empty bit-set or list. Errors from
/// the extension lookup (e.g. a duplicated extension) are passed through.
/// An EKU OID that does not fit a dotted OID is kept as `ExtKeyUsage::Other`
/// in its raw rendering, so it never matches a policy entry.
pub fn usage_from_certificate(cert: &X509Certificate<'_>) -> PolicyResult<CertificateUsage> {
  let mut key_usage = KeyUsage::empty();
  if let Some(ext) = cert.key_usage()? {
    let ku = ext.value;
    let bits = [
      (ku.digital_signature(), KeyUsageFlags::DigitalSignature),
      (ku.non_repudiation(), KeyUsageFlags::ContentCommitment),
      (ku.key_encipherment(), KeyUsageFlags::KeyEncipherment),
      (ku.data_encipherment(), KeyUsageFlags::DataEncipherment),
      (ku.key_agreement(), KeyUsageFlags::KeyAgreement),
      (ku.key_cert_sign(), KeyUsageFlags::KeyCertSign),
      (ku.crl_sign(), KeyUsageFlags::CrlSign),
      (ku.encipher_only(), KeyUsageFlags::EncipherOnly),
      (ku.decipher_only(), KeyUsageFlags::DecipherOnly),
    ];
    for (set, bit) in bits {
      if set {
        key_usage.insert(bit);
      }
    }
  }

  let mut ext_key_usage = Vec::new();
  if let Some(ext) = cert.extended_key_usage()? {
    let eku = ext.value;
    // x509-parser folds common purposes into booleans; emit them in RFC 5280
    // order, then the remaining OIDs as declared.
    let flags = [
      (eku.any, ExtKeyUsage::Any),
      (eku.server_auth, ExtKeyUsage::ServerAuth),
      (eku.client_auth, ExtKeyUsage::ClientAuth),
      (eku.code_signing, ExtKeyUsage::CodeSigning),
      (eku.email_protection, ExtKeyUsage::EmailProtection),
      (eku.time_stamping, ExtKeyUsage::TimeStamping),
      (eku.ocsp_signing, ExtKeyUsage::OcspSigning),
    ];
    ext_key_usage.extend(flags.into_iter().filter(|(set, _)| *set).map(|(_, purpose)| purpose));
    for oid in eku.other.iter() {
      let raw = oid.to_id_string();
      match raw.parse::<ExtKeyUsage>() {
        Ok(purpose) => ext_key_usage.push(purpose),
        Err(e) => {
          debug!("keeping undecodable EKU OID as-is: {e}");
          ext_key_usage.push(ExtKeyUsage::Other(raw));
        }
      }
    }
  }

  Ok(CertificateUsage { key_usage, ext_key_usage })
}
