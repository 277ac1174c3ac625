// Bridges from external certificate models into `CertificateUsage`.

#[cfg(feature = "x509")]
pub mod x509;
