// Re-export all types so callers can use `domain::types::*`.

pub use purpose::*;
pub use usage::*;
pub use policy::*;
pub use config::*;

// Module declarations
mod purpose;
mod usage;
mod policy;
mod config;
