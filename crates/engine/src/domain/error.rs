// crates/engine/src/domain/error.rs
use thiserror::Error;

/// Errors raised at the fallible edges of the engine: loading a policy,
/// parsing purpose identifiers, extracting usage from a parsed certificate.
/// Evaluating a policy never fails.
#[derive(Debug, Error)]
pub enum PolicyError {
  #[error("configuration: {0}")]
  Config(String),

  #[error("invalid OID: {0}")]
  InvalidOid(String),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[cfg(feature = "x509")]
  #[error(transparent)]
  X509(#[from] x509_parser::error::X509Error),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
