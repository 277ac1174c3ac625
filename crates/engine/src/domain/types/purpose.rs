//! Extended Key Usage purpose identifiers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use const_oid::ObjectIdentifier;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::error::PolicyError;

/// A named EKU purpose bound to its canonical dotted OID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Purpose {
    pub name: &'static str,
    pub oid: &'static str,
}

/// anyExtendedKeyUsage (RFC 5280 4.2.1.12).
pub const ANY_PURPOSE: Purpose = Purpose { name: "anyExtendedKeyUsage", oid: "2.5.29.37.0" };
pub const SERVER_AUTH: Purpose = Purpose { name: "serverAuth", oid: "1.3.6.1.5.5.7.3.1" };
pub const CLIENT_AUTH: Purpose = Purpose { name: "clientAuth", oid: "1.3.6.1.5.5.7.3.2" };
pub const CODE_SIGNING: Purpose = Purpose { name: "codeSigning", oid: "1.3.6.1.5.5.7.3.3" };
pub const EMAIL_PROTECTION: Purpose = Purpose { name: "emailProtection", oid: "1.3.6.1.5.5.7.3.4" };
pub const TIME_STAMPING: Purpose = Purpose { name: "timeStamping", oid: "1.3.6.1.5.5.7.3.8" };
pub const OCSP_SIGNING: Purpose = Purpose { name: "OCSPSigning", oid: "1.3.6.1.5.5.7.3.9" };
/// id-kp-documentSigning (RFC 9336).
pub const DOCUMENT_SIGNING: Purpose =
    Purpose { name: "documentSigning", oid: "1.3.6.1.5.5.7.3.36" };

/// An Extended Key Usage purpose as declared by a certificate or listed in a policy.
///
/// Purposes the engine knows by name get their own variant; anything else is
/// carried as its dotted OID in `Other`. Parsing always normalises a known OID
/// to its named variant, so `Other` never holds e.g. `2.5.29.37.0`.
///
/// The certificate adapter may also place an OID it could not decode in
/// `Other`, kept in the rendering `x509-parser` gave it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExtKeyUsage {
    Any,
    ServerAuth,
    ClientAuth,
    CodeSigning,
    EmailProtection,
    TimeStamping,
    OcspSigning,
    DocumentSigning,
    Other(String),
}

static KNOWN_PURPOSES: Lazy<HashMap<&'static str, ExtKeyUsage>> = Lazy::new(|| {
    let known = [
        ExtKeyUsage::Any,
        ExtKeyUsage::ServerAuth,
        ExtKeyUsage::ClientAuth,
        ExtKeyUsage::CodeSigning,
        ExtKeyUsage::EmailProtection,
        ExtKeyUsage::TimeStamping,
        ExtKeyUsage::OcspSigning,
        ExtKeyUsage::DocumentSigning,
    ];
    let mut map = HashMap::with_capacity(known.len() * 2);
    for eku in known {
        if let Some(p) = eku.purpose() {
            map.insert(p.oid, eku.clone());
            map.insert(p.name, eku);
        }
    }
    map
});

impl ExtKeyUsage {
    /// The named purpose for known variants; `None` for `Other`.
    pub fn purpose(&self) -> Option<&'static Purpose> {
        match self {
            ExtKeyUsage::Any => Some(&ANY_PURPOSE),
            ExtKeyUsage::ServerAuth => Some(&SERVER_AUTH),
            ExtKeyUsage::ClientAuth => Some(&CLIENT_AUTH),
            ExtKeyUsage::CodeSigning => Some(&CODE_SIGNING),
            ExtKeyUsage::EmailProtection => Some(&EMAIL_PROTECTION),
            ExtKeyUsage::TimeStamping => Some(&TIME_STAMPING),
            ExtKeyUsage::OcspSigning => Some(&OCSP_SIGNING),
            ExtKeyUsage::DocumentSigning => Some(&DOCUMENT_SIGNING),
            ExtKeyUsage::Other(_) => None,
        }
    }

    /// Dotted OID notation.
    pub fn oid(&self) -> &str {
        match self {
            ExtKeyUsage::Other(oid) => oid,
            known => known.purpose().map_or("", |p| p.oid),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.purpose().map(|p| p.name)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, ExtKeyUsage::Any)
    }
}

impl FromStr for ExtKeyUsage {
    type Err = PolicyError;

    /// Accepts a dotted OID or the symbolic name of a known purpose.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(known) = KNOWN_PURPOSES.get(s) {
            return Ok(known.clone());
        }
        let oid = ObjectIdentifier::from_str(s)
            .map_err(|e| PolicyError::InvalidOid(format!("{s}: {e}")))?;
        let canonical = oid.to_string();
        match KNOWN_PURPOSES.get(canonical.as_str()) {
            Some(known) => Ok(known.clone()),
            None => Ok(ExtKeyUsage::Other(canonical)),
        }
    }
}

impl TryFrom<String> for ExtKeyUsage {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExtKeyUsage> for String {
    fn from(value: ExtKeyUsage) -> Self {
        value.oid().to_string()
    }
}

impl fmt::Display for ExtKeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.oid()),
            None => f.write_str(self.oid()),
        }
    }
}
