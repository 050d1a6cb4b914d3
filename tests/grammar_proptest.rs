//! Property-based tests for the release and version grammar.
//!
//! These tests generate release names according to the grammar and verify
//! the parser decomposes them the way they were built.

use proptest::prelude::*;

use release_parser::{is_build_hash, split_release, Release, Version, MAX_RELEASE_LENGTH};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// A numeric component, small enough to never overflow.
    pub fn numeral() -> impl Strategy<Value = String> {
        "[0-9]{1,6}"
    }

    /// A pre-release identifier: `0`, a number without leading zeros, or a
    /// token with at least one letter or dash.
    pub fn identifier() -> impl Strategy<Value = String> {
        "0|[1-9][0-9]{0,4}|[0-9]{0,3}[a-zA-Z-][0-9a-zA-Z-]{0,6}"
    }

    /// `-` followed by dot-separated identifiers.
    pub fn pre_release() -> impl Strategy<Value = String> {
        prop::collection::vec(identifier(), 1..=4).prop_map(|ids| ids.join("."))
    }

    /// Dot-separated build tokens. Single tokens are too short to be a hash.
    pub fn build_code() -> impl Strategy<Value = String> {
        prop::collection::vec("[0-9a-zA-Z-]{1,8}", 1..=4).prop_map(|tokens| tokens.join("."))
    }

    /// A version as `(numerals, pre, build)`.
    pub fn version_parts() -> impl Strategy<Value = (Vec<String>, Option<String>, Option<String>)> {
        (
            prop::collection::vec(numeral(), 1..=4),
            prop::option::of(pre_release()),
            prop::option::of(build_code()),
        )
    }

    pub fn render(numerals: &[String], pre: &Option<String>, build: &Option<String>) -> String {
        let mut s = numerals.join(".");
        if let Some(pre) = pre {
            s.push('-');
            s.push_str(pre);
        }
        if let Some(build) = build {
            s.push('+');
            s.push_str(build);
        }
        s
    }

    pub fn package() -> impl Strategy<Value = String> {
        "@?[a-z][a-z0-9.-]{0,15}"
    }

    pub fn hex_hash() -> impl Strategy<Value = String> {
        prop::sample::select(vec![12usize, 16, 20, 32, 40, 64])
            .prop_flat_map(|len| proptest::string::string_regex(&format!("[0-9a-fA-F]{{{len}}}")).unwrap())
    }
}

mod version_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn valid_versions_parse((numerals, pre, build) in version_parts()) {
            let raw = render(&numerals, &pre, &build);
            let version = Version::try_parse(&raw);
            prop_assert!(version.is_some(), "Failed to parse version: {}", raw);
            let version = version.unwrap();

            prop_assert_eq!(version.components() as usize, numerals.len());
            prop_assert_eq!(version.raw_quad().0, numerals[0].as_str());
            prop_assert_eq!(version.major(), numerals[0].parse::<u64>().unwrap());
            prop_assert_eq!(version.pre(), pre.as_deref());
            prop_assert_eq!(version.build_code(), build.as_deref());
            prop_assert_eq!(version.raw_short(), render(&numerals, &pre, &None));
        }

        #[test]
        fn absent_components_are_zero(major in numeral()) {
            let version = Version::try_parse(&major).unwrap();
            prop_assert_eq!(version.components(), 1);
            prop_assert_eq!((version.minor(), version.patch(), version.revision()), (0, 0, 0));
        }

        #[test]
        fn bare_letter_after_single_numeral_is_rejected(s in "[0-9]{1,5}[a-z][a-z0-9]{0,5}") {
            prop_assert!(Version::try_parse(&s).is_none(), "Parsed ambiguous version: {}", s);
        }

        #[test]
        fn bare_letter_after_minor_is_accepted(
            major in numeral(),
            minor in numeral(),
            tag in "[a-z][a-z]{0,3}[1-9]{0,2}"
        ) {
            let raw = format!("{major}.{minor}{tag}");
            let version = Version::try_parse(&raw);
            prop_assert!(version.is_some(), "Failed to parse version: {}", raw);
            prop_assert_eq!(version.unwrap().pre(), Some(tag.as_str()));
        }
    }
}

mod release_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn describe_reproduces_version_text((numerals, pre, build) in version_parts()) {
            let raw = render(&numerals, &pre, &build);
            let release = Release::parse(&raw).unwrap();
            let expected = match &build {
                Some(build) => format!("{} ({build})", render(&numerals, &pre, &None)),
                None => raw.clone(),
            };
            prop_assert_eq!(release.describe(), expected);
        }

        #[test]
        fn package_split(package in package(), (numerals, pre, build) in version_parts()) {
            let version = render(&numerals, &pre, &build);
            let input = format!("{package}@{version}");
            prop_assert_eq!(split_release(&input), (Some(package.as_str()), version.as_str()));

            let release = Release::parse(&input).unwrap();
            prop_assert_eq!(release.package(), Some(package.as_str()));
            prop_assert!(release.version().is_some());
        }

        #[test]
        fn hashes_are_never_versions(package in package(), hash in hex_hash()) {
            let input = format!("{package}@{hash}");
            let release = Release::parse(&input).unwrap();
            prop_assert!(release.version().is_none());
            prop_assert_eq!(release.build_hash(), Some(hash.as_str()));
            prop_assert_eq!(release.describe(), &hash[..12]);
        }

        #[test]
        fn hash_in_build_metadata(numerals in prop::collection::vec(numeral(), 1..=3), hash in hex_hash()) {
            let input = format!("{}+{hash}", numerals.join("."));
            let release = Release::parse(&input).unwrap();
            prop_assert_eq!(release.build_hash(), Some(hash.as_str()));
            prop_assert_eq!(release.describe(), format!("{} ({})", numerals.join("."), &hash[..12]));
        }

        #[test]
        fn long_names_are_rejected(name in "[a-z0-9.]{251,400}") {
            let err = Release::parse(&name).unwrap_err();
            prop_assert_eq!(err.code(), "TOO_LONG");
            prop_assert!(name.len() > MAX_RELEASE_LENGTH);
        }

        #[test]
        fn bad_characters_are_rejected(name in "[a-z0-9]{1,10}[/\r\n][a-z0-9]{1,10}") {
            prop_assert_eq!(Release::parse(&name).unwrap_err().code(), "BAD_CHARACTERS");
        }
    }
}

mod hash_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn sha1_hex_is_a_hash(s in "[0-9a-f]{40}") {
            prop_assert!(is_build_hash(&s));
        }

        #[test]
        fn forty_one_hex_is_not_a_hash(s in "[0-9a-f]{41}") {
            prop_assert!(!is_build_hash(&s));
        }

        #[test]
        fn non_hex_character_is_not_a_hash(
            prefix in "[0-9a-f]{0,39}",
            bad in "[g-zG-Z_.-]"
        ) {
            let mut s = prefix;
            s.push_str(&bad);
            while s.len() < 40 {
                s.push('a');
            }
            prop_assert!(!is_build_hash(&s));
        }
    }
}
