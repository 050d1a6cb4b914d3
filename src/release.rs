use std::fmt;

use tracing::{debug, trace};

use crate::constants::{MAX_RELEASE_LENGTH, RESTRICTED_RELEASE_NAMES, SHORT_HASH_LENGTH};
use crate::error::{Error, Result};
use crate::hash::is_build_hash;
use crate::version::Version;

/// The version half of a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseVersion<'a> {
    /// The version string matched the version grammar.
    Parsed(Version<'a>),
    /// Free-form text or a build hash.
    Unparsed,
}

impl<'a> ReleaseVersion<'a> {
    pub fn as_parsed(&self) -> Option<&Version<'a>> {
        match self {
            ReleaseVersion::Parsed(version) => Some(version),
            ReleaseVersion::Unparsed => None,
        }
    }
}

/// Broad shape of a release name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseFormat {
    /// Carries a structured version (`1.0.0`, `pkg@1.0.0`).
    Versioned,
    /// Carries a package prefix but no structured version (`pkg@abcdef`).
    Qualified,
    /// Neither (`085240e737828d8326719bf97730188e927e49ca`, `nightly`).
    Unqualified,
}

impl ReleaseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseFormat::Versioned => "versioned",
            ReleaseFormat::Qualified => "qualified",
            ReleaseFormat::Unqualified => "unqualified",
        }
    }
}

impl fmt::Display for ReleaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed release identifier such as `package@1.2.3-beta+abcdef`.
///
/// A release is an optional package name, followed by `@` and a version
/// string. The version string is decomposed into a [`Version`] when it
/// matches the version grammar and is not itself a build hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Release<'a> {
    raw: &'a str,
    package: Option<&'a str>,
    version_raw: &'a str,
    version: ReleaseVersion<'a>,
}

impl<'a> Release<'a> {
    /// Validate and parse a release name.
    ///
    /// Surrounding whitespace is trimmed first. The trimmed name is rejected
    /// if it is longer than 250 characters, is one of `.`, `..` or `latest`,
    /// or contains `/`, `\r` or `\n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use release_parser::Release;
    ///
    /// let release = Release::parse("@foo.bar.baz--blah@1.2.3-dev+BUILD-code").unwrap();
    /// assert_eq!(release.package(), Some("@foo.bar.baz--blah"));
    /// assert_eq!(release.version_raw(), "1.2.3-dev+BUILD-code");
    /// assert_eq!(release.version().unwrap().pre(), Some("dev"));
    /// assert_eq!(release.describe(), "1.2.3-dev (BUILD-code)");
    ///
    /// assert!(Release::parse("latest").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<Release<'a>> {
        let release = input.trim();
        if let Err(err) = validate(release) {
            debug!(release, %err, "rejected release name");
            return Err(err);
        }

        let (package, version_raw) = split_release(release);
        let version = if is_build_hash(version_raw) {
            trace!(version_raw, "version is a build hash, not parsing");
            ReleaseVersion::Unparsed
        } else {
            Version::try_parse(version_raw).map_or(ReleaseVersion::Unparsed, ReleaseVersion::Parsed)
        };

        Ok(Release {
            raw: release,
            package,
            version_raw,
            version,
        })
    }

    /// The trimmed release name.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The package name, including a leading `@` scope marker.
    pub fn package(&self) -> Option<&'a str> {
        self.package
    }

    /// Everything after the package separator, or the whole name.
    pub fn version_raw(&self) -> &'a str {
        self.version_raw
    }

    pub fn release_version(&self) -> &ReleaseVersion<'a> {
        &self.version
    }

    /// The structured version, if the version string is one.
    pub fn version(&self) -> Option<&Version<'a>> {
        self.version.as_parsed()
    }

    pub fn format(&self) -> ReleaseFormat {
        match (&self.version, self.package) {
            (ReleaseVersion::Parsed(_), _) => ReleaseFormat::Versioned,
            (ReleaseVersion::Unparsed, Some(_)) => ReleaseFormat::Qualified,
            (ReleaseVersion::Unparsed, None) => ReleaseFormat::Unqualified,
        }
    }

    /// The build hash attached to this release.
    ///
    /// Build metadata that is a hash (`1.0.0+<hash>`) wins over a version
    /// string that is a hash in its entirety.
    ///
    /// ```
    /// use release_parser::Release;
    ///
    /// let release = Release::parse("package@085240e737828d8326719bf97730188e927e49ca").unwrap();
    /// assert!(release.version().is_none());
    /// assert_eq!(release.build_hash(), Some("085240e737828d8326719bf97730188e927e49ca"));
    /// ```
    pub fn build_hash(&self) -> Option<&'a str> {
        self.version()
            .and_then(|version| version.build_hash())
            .or_else(|| Some(self.version_raw).filter(|raw| is_build_hash(raw)))
    }

    /// A short human-readable label for the release.
    ///
    /// Structured versions keep their original text, with build metadata
    /// (or the first 12 characters of a build hash) in parentheses. Bare
    /// hashes are shortened to 12 characters.
    ///
    /// ```
    /// use release_parser::Release;
    ///
    /// let release = Release::parse("package@1.0.0+deadbeefdeadbeefdeadbeefdeadbeef").unwrap();
    /// assert_eq!(release.describe(), "1.0.0 (deadbeefdead)");
    /// ```
    pub fn describe(&self) -> String {
        let short_hash = self.build_hash().map(|hash| &hash[..SHORT_HASH_LENGTH]);
        match (self.version(), short_hash) {
            (Some(version), Some(hash)) => format!("{} ({hash})", version.raw_short()),
            (Some(version), None) => match version.build_code() {
                Some(code) => format!("{} ({code})", version.raw_short()),
                None => version.raw_short().to_string(),
            },
            (None, Some(hash)) => hash.to_string(),
            (None, None) => self.version_raw.to_string(),
        }
    }
}

impl fmt::Display for Release<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Release<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Release", 6)?;
        state.serialize_field("package", &self.package)?;
        state.serialize_field("version_raw", &self.version_raw)?;
        state.serialize_field("version_parsed", &self.version())?;
        state.serialize_field("build_hash", &self.build_hash())?;
        state.serialize_field("description", &self.describe())?;
        state.serialize_field("format", self.format().as_str())?;
        state.end()
    }
}

fn validate(release: &str) -> Result<()> {
    let length = release.chars().count();
    if length > MAX_RELEASE_LENGTH {
        return Err(Error::TooLong(length));
    }
    if RESTRICTED_RELEASE_NAMES.contains(&release) {
        return Err(Error::RestrictedName(release.to_string()));
    }
    if release.contains(['/', '\r', '\n']) {
        return Err(Error::BadCharacters);
    }
    Ok(())
}

/// Split a release name into package and version.
///
/// The first `@` that follows at least one non-`@` character separates the
/// two; a single leading `@` belongs to the package as a scope marker. The
/// version part must be non-empty. Without a separator the whole name is the
/// version.
///
/// # Examples
///
/// ```
/// use release_parser::split_release;
///
/// assert_eq!(split_release("@scope/pkg@1.0.0"), (Some("@scope/pkg"), "1.0.0"));
/// assert_eq!(split_release("pkg@1.0@beta"), (Some("pkg"), "1.0@beta"));
/// assert_eq!(split_release("1.0.0"), (None, "1.0.0"));
/// assert_eq!(split_release("pkg@"), (None, "pkg@"));
/// ```
pub fn split_release(release: &str) -> (Option<&str>, &str) {
    let scope = usize::from(release.starts_with('@'));
    match release[scope..].find('@') {
        Some(at) if at > 0 && scope + at + 1 < release.len() => {
            let at = scope + at;
            (Some(&release[..at]), &release[at + 1..])
        }
        _ => (None, release),
    }
}
