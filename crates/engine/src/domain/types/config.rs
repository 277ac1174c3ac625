/// Centralized defaults for usage policies.
/// All opinionated defaults should be defined here for consistency.
pub struct PolicyDefaults;

impl PolicyDefaults {
    pub const REQUIRE_DIGITAL_SIGNATURE_KU: bool = true; // Signing keys must sign
    pub const ALLOW_NON_REPUDIATION_KU: bool = true; // Common on document-signing certs
    /// How many leading catalog entries become required purposes.
    pub const REQUIRED_CATALOG_ENTRIES: usize = 1; // Document Signing only
}
