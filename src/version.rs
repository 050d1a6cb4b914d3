use std::fmt;

use tracing::trace;
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::{Error, Result};
use crate::hash::is_build_hash;

/// How a pre-release tag was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreDelimiter {
    /// `1.0.0-beta`: an explicit `-`, which is not part of the tag.
    Dash,
    /// `1.0a1`: a lowercase letter, which is the first character of the tag.
    Letter,
}

/// A structured version decomposed from a release's version string.
///
/// The grammar is a permissive superset of semver: leading zeros are allowed
/// in every numeric component, up to four numeric components are accepted,
/// and a pre-release tag may start with a bare lowercase letter instead of
/// `-`.
///
/// Absent numeric components read as `0`; [`components`](Self::components)
/// and [`raw_quad`](Self::raw_quad) tell an explicit `0` apart from a missing
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version<'a> {
    raw: &'a str,
    raw_short: &'a str,
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    raw_quad: (&'a str, Option<&'a str>, Option<&'a str>, Option<&'a str>),
    pre: Option<(PreDelimiter, &'a str)>,
    build_code: Option<&'a str>,
}

impl<'a> Version<'a> {
    /// Parse a version string, failing with [`Error::InvalidVersion`] if it
    /// does not match the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use release_parser::Version;
    ///
    /// let v = Version::parse("1.2.3-dev+BUILD-code").unwrap();
    /// assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
    /// assert_eq!(v.pre(), Some("dev"));
    /// assert_eq!(v.build_code(), Some("BUILD-code"));
    ///
    /// assert!(Version::parse("1a1").is_err());
    /// ```
    pub fn parse(version: &'a str) -> Result<Version<'a>> {
        Version::try_parse(version).ok_or_else(|| Error::InvalidVersion(version.to_string()))
    }

    /// Parse a version string, returning `None` if it is not a version.
    ///
    /// A non-match is the normal outcome for free-form release names, so
    /// this is what [`Release`](crate::Release) uses.
    pub fn try_parse(version: &'a str) -> Option<Version<'a>> {
        let caps = version_captures.parse(version).ok()?;

        // `1a1` reads more like a token than a version; `1.0a1` and `1-a1` don't.
        if caps.minor.is_none() && matches!(caps.pre, Some((PreDelimiter::Letter, _))) {
            trace!(version, "bare letter suffix after a single numeral, not a version");
            return None;
        }

        let pre = caps.pre.map(|(delimiter, tag)| match delimiter {
            PreDelimiter::Dash => (delimiter, &tag[1..]),
            PreDelimiter::Letter => (delimiter, tag),
        });
        let raw_short = match caps.build_code {
            Some(code) => &version[..version.len() - code.len() - 1],
            None => version,
        };

        Some(Version {
            raw: version,
            raw_short,
            major: caps.major.parse().ok()?,
            minor: numeric_value(caps.minor)?,
            patch: numeric_value(caps.patch)?,
            revision: numeric_value(caps.revision)?,
            raw_quad: (caps.major, caps.minor, caps.patch, caps.revision),
            pre,
            build_code: caps.build_code,
        })
    }

    /// The exact string that was parsed.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The parsed string without its `+build` suffix.
    pub fn raw_short(&self) -> &'a str {
        self.raw_short
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Fourth numeric component, outside of semver.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The numeric components as they appeared in the input.
    ///
    /// ```
    /// use release_parser::Version;
    ///
    /// let v = Version::parse("1.02").unwrap();
    /// assert_eq!(v.raw_quad(), ("1", Some("02"), None, None));
    /// assert_eq!(v.components(), 2);
    /// ```
    pub fn raw_quad(&self) -> (&'a str, Option<&'a str>, Option<&'a str>, Option<&'a str>) {
        self.raw_quad
    }

    /// Number of numeric components present in the input (1 to 4).
    pub fn components(&self) -> u8 {
        let (_, minor, patch, revision) = self.raw_quad;
        1 + [minor, patch, revision].iter().filter(|c| c.is_some()).count() as u8
    }

    /// The pre-release tag, without a leading `-`.
    ///
    /// An empty tag (`1.0.0-`) is reported as `None`.
    pub fn pre(&self) -> Option<&'a str> {
        self.pre.map(|(_, tag)| tag).filter(|tag| !tag.is_empty())
    }

    /// How the pre-release tag was introduced, if there is one.
    pub fn pre_delimiter(&self) -> Option<PreDelimiter> {
        self.pre.map(|(delimiter, _)| delimiter)
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre().is_some()
    }

    /// Build metadata, the text after `+`.
    pub fn build_code(&self) -> Option<&'a str> {
        self.build_code
    }

    /// Build metadata in lowercase.
    pub fn normalized_build_code(&self) -> Option<String> {
        self.build_code.map(|code| code.to_ascii_lowercase())
    }

    /// Build metadata, if it is itself a build hash.
    pub fn build_hash(&self) -> Option<&'a str> {
        self.build_code.filter(|code| is_build_hash(code))
    }

    /// Convert into a [`semver::Version`].
    ///
    /// The revision is dropped. Pre-release or build text that semver would
    /// reject is replaced by an empty value.
    #[cfg(feature = "semver")]
    pub fn as_semver(&self) -> semver::Version {
        semver::Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre: self
                .pre()
                .and_then(|pre| semver::Prerelease::new(pre).ok())
                .unwrap_or(semver::Prerelease::EMPTY),
            build: self
                .build_code
                .and_then(|code| semver::BuildMetadata::new(code).ok())
                .unwrap_or(semver::BuildMetadata::EMPTY),
        }
    }
}

impl fmt::Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Version", 10)?;
        state.serialize_field("major", &self.major)?;
        state.serialize_field("minor", &self.minor)?;
        state.serialize_field("patch", &self.patch)?;
        state.serialize_field("revision", &self.revision)?;
        state.serialize_field("pre", &self.pre())?;
        state.serialize_field("build_code", &self.build_code)?;
        state.serialize_field("normalized_build_code", &self.normalized_build_code())?;
        state.serialize_field("components", &self.components())?;
        state.serialize_field("raw_quad", &self.raw_quad)?;
        state.serialize_field("raw_short", &self.raw_short)?;
        state.end()
    }
}

fn numeric_value(component: Option<&str>) -> Option<u64> {
    component.map_or(Some(0), |digits| digits.parse().ok())
}

// Winnow parsers

struct Captures<'s> {
    major: &'s str,
    minor: Option<&'s str>,
    patch: Option<&'s str>,
    revision: Option<&'s str>,
    pre: Option<(PreDelimiter, &'s str)>,
    build_code: Option<&'s str>,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Numeric identifiers may not have leading zeros; anything with a letter or
/// dash is fine.
fn is_valid_identifier(ident: &str) -> bool {
    if ident.bytes().all(|b| b.is_ascii_digit()) {
        ident == "0" || !ident.starts_with('0')
    } else {
        true
    }
}

fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., is_identifier_char)
        .verify(|ident: &str| is_valid_identifier(ident))
        .parse_next(input)
}

fn dotted_numeral<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    preceded('.', digit1).parse_next(input)
}

fn pre_delimiter(input: &mut &str) -> ModalResult<PreDelimiter> {
    alt((
        '-'.value(PreDelimiter::Dash),
        one_of('a'..='z').value(PreDelimiter::Letter),
    ))
    .parse_next(input)
}

/// Delimiter plus dot-separated identifiers; only the first may be empty.
fn pre_release<'s>(input: &mut &'s str) -> ModalResult<(PreDelimiter, &'s str)> {
    (
        pre_delimiter,
        opt(identifier),
        repeat(0.., preceded('.', identifier)).map(|()| ()),
    )
        .with_taken()
        .map(|((delimiter, _, ()), tag)| (delimiter, tag))
        .parse_next(input)
}

fn build_code<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    separated(1.., take_while(1.., is_identifier_char), '.')
        .map(|()| ())
        .take()
        .parse_next(input)
}

fn version_captures<'s>(input: &mut &'s str) -> ModalResult<Captures<'s>> {
    let major = digit1.parse_next(input)?;
    let minor = opt(dotted_numeral).parse_next(input)?;
    let patch = opt(dotted_numeral).parse_next(input)?;
    let revision = opt(dotted_numeral).parse_next(input)?;
    let pre = opt(pre_release).parse_next(input)?;
    let build_code = opt(preceded('+', build_code)).parse_next(input)?;
    Ok(Captures {
        major,
        minor,
        patch,
        revision,
        pre,
        build_code,
    })
}
