//! Parser for release identifiers such as `package@1.2.3-beta+abcdef`.
//!
//! This crate classifies an opaque release name into an optional package
//! name, a raw version string and, when the version string looks like one,
//! a structured [`Version`].
//!
//! # Overview
//!
//! Release names come from build systems and people, so the version grammar
//! is deliberately permissive: leading zeros, a fourth numeric component and
//! pre-release tags introduced by a bare letter (`1.0a1`) are all accepted.
//! Content hashes are recognized and never coerced into version numbers.
//!
//! ```text
//! [@scope/]package@major[.minor[.patch[.revision]]][-pre|letter-pre][+build]
//! ```
//!
//! # Examples
//!
//! Parse a release and inspect its parts:
//!
//! ```
//! use release_parser::{Release, ReleaseFormat};
//!
//! let release = Release::parse("my-app@2.0.1-rc.1+5a2c0e7d9b3f").unwrap();
//! assert_eq!(release.package(), Some("my-app"));
//! assert_eq!(release.format(), ReleaseFormat::Versioned);
//!
//! let version = release.version().unwrap();
//! assert_eq!((version.major(), version.minor(), version.patch()), (2, 0, 1));
//! assert_eq!(version.pre(), Some("rc.1"));
//!
//! assert_eq!(release.build_hash(), Some("5a2c0e7d9b3f"));
//! assert_eq!(release.describe(), "2.0.1-rc.1 (5a2c0e7d9b3f)");
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` for [`Release`] and [`Version`].
//! - `semver`: adds `Version::as_semver` for conversion into a
//!   `semver::Version`.

mod constants;
mod error;
mod hash;
mod release;
mod version;

// Re-export public types
pub use constants::{
    BUILD_HASH_LENGTHS, MAX_RELEASE_LENGTH, RESTRICTED_RELEASE_NAMES, SHORT_HASH_LENGTH,
};
pub use error::{Error, Result};
pub use hash::is_build_hash;
pub use release::{split_release, Release, ReleaseFormat, ReleaseVersion};
pub use version::{PreDelimiter, Version};
