use flagset::{flags, FlagSet};
use serde::{Deserialize, Serialize};

use super::purpose::ExtKeyUsage;

flags! {
    /// Key usage flags (RFC 5280 4.2.1.3), in bit-string order.
    /// `ContentCommitment` is the former nonRepudiation bit.
    pub enum KeyUsageFlags: u16 {
        DigitalSignature = 1 << 0,
        ContentCommitment = 1 << 1,
        KeyEncipherment = 1 << 2,
        DataEncipherment = 1 << 3,
        KeyAgreement = 1 << 4,
        KeyCertSign = 1 << 5,
        CrlSign = 1 << 6,
        EncipherOnly = 1 << 7,
        DecipherOnly = 1 << 8,
    }
}

/// Key Usage of a certificate. Serialised as the raw bit mask, bit 0 = digitalSignature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct KeyUsage(FlagSet<KeyUsageFlags>);

impl KeyUsage {
    pub fn new(flags: impl Into<FlagSet<KeyUsageFlags>>) -> Self {
        KeyUsage(flags.into())
    }

    pub fn empty() -> Self {
        KeyUsage(FlagSet::default())
    }

    /// Unknown high bits are dropped.
    pub fn from_bits_truncate(bits: u16) -> Self {
        KeyUsage(FlagSet::new_truncated(bits))
    }

    pub fn bits(self) -> u16 {
        self.0.bits()
    }

    pub fn flags(self) -> FlagSet<KeyUsageFlags> {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(self, flags: impl Into<FlagSet<KeyUsageFlags>>) -> bool {
        self.0.contains(flags)
    }

    pub fn insert(&mut self, flags: impl Into<FlagSet<KeyUsageFlags>>) {
        self.0 |= flags.into();
    }
}

impl Default for KeyUsage {
    fn default() -> Self {
        KeyUsage::empty()
    }
}

impl From<KeyUsageFlags> for KeyUsage {
    fn from(flag: KeyUsageFlags) -> Self {
        KeyUsage::new(flag)
    }
}

impl From<FlagSet<KeyUsageFlags>> for KeyUsage {
    fn from(flags: FlagSet<KeyUsageFlags>) -> Self {
        KeyUsage(flags)
    }
}

impl From<u16> for KeyUsage {
    fn from(bits: u16) -> Self {
        KeyUsage::from_bits_truncate(bits)
    }
}

impl From<KeyUsage> for u16 {
    fn from(value: KeyUsage) -> Self {
        value.bits()
    }
}

/// Usage attributes of an already-parsed certificate.
/// Produced by the certificate-parsing collaborator; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateUsage {
    pub key_usage: KeyUsage,
    /// EKU purposes in certificate order.
    pub ext_key_usage: Vec<ExtKeyUsage>,
}

impl CertificateUsage {
    pub fn new(key_usage: KeyUsage, ext_key_usage: impl IntoIterator<Item = ExtKeyUsage>) -> Self {
        Self {
            key_usage,
            ext_key_usage: ext_key_usage.into_iter().collect(),
        }
    }
}
