//! Limits and reserved values for release identifiers.

/// Maximum length of a trimmed release name, in characters.
pub const MAX_RELEASE_LENGTH: usize = 250;

/// Release names that are rejected outright.
pub const RESTRICTED_RELEASE_NAMES: &[&str] = &[".", "..", "latest"];

/// Lengths of hex digests recognized as build hashes.
///
/// Short VCS hashes (12, 16, 20), MD5 (32), SHA-1 (40) and SHA-256 (64).
pub const BUILD_HASH_LENGTHS: &[usize] = &[12, 16, 20, 32, 40, 64];

/// Number of hash characters shown in a release description.
pub const SHORT_HASH_LENGTH: usize = 12;
