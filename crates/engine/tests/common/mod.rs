#![allow(dead_code)]

use docsign_usage as du;
use rcgen::{
    Certificate, CertificateParams, CustomExtension, ExtendedKeyUsagePurpose, KeyUsagePurpose,
};

/// Usage attributes as the certificate-parsing collaborator would hand them over.
pub fn usage(key_usage: impl Into<du::KeyUsage>, ekus: &[du::ExtKeyUsage]) -> du::CertificateUsage {
    du::CertificateUsage::new(key_usage.into(), ekus.iter().cloned())
}

/// Digital Signature bit set, the given EKUs.
pub fn signing_usage(ekus: &[du::ExtKeyUsage]) -> du::CertificateUsage {
    usage(du::KeyUsageFlags::DigitalSignature, ekus)
}

/// Requires Digital Signature and prefers Document Signing; nothing allowed.
pub fn document_signing_policy() -> du::PolicyConfig {
    du::PolicyConfig {
        require_digital_signature_ku: true,
        required_ekus: vec![du::ExtKeyUsage::DocumentSigning],
        ..Default::default()
    }
}

/// Self-signed ES256 certificate in DER with the requested usages. Empty
/// slices leave the corresponding extension out.
pub fn generate_cert_der(
    key_usages: Vec<KeyUsagePurpose>,
    ext_key_usages: Vec<ExtendedKeyUsagePurpose>,
) -> Vec<u8> {
    let mut params = CertificateParams::new(vec!["signer.test".to_string()]);
    params.alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    params.key_usages = key_usages;
    params.extended_key_usages = ext_key_usages;
    let cert = Certificate::from_params(params).expect("cert");
    cert.serialize_der().expect("cert der")
}

/// Like `generate_cert_der`, but the EKU extension is written from the raw DER
/// `ExtKeyUsageSyntax` sequence, for purposes rcgen has no variant for.
pub fn generate_cert_der_with_eku(key_usages: Vec<KeyUsagePurpose>, eku_der: Vec<u8>) -> Vec<u8> {
    let mut params = CertificateParams::new(vec!["signer.test".to_string()]);
    params.alg = &rcgen::PKCS_ECDSA_P256_SHA256;
    params.key_usages = key_usages;
    params.custom_extensions = vec![CustomExtension::from_oid_content(&[2, 5, 29, 37], eku_der)];
    let cert = Certificate::from_params(params).expect("cert");
    cert.serialize_der().expect("cert der")
}
