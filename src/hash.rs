use crate::constants::BUILD_HASH_LENGTHS;

/// Check whether a string looks like a content hash.
///
/// A build hash is a hex string (either case) whose length matches one of the
/// common digest sizes in [`BUILD_HASH_LENGTHS`]. The input is not trimmed or
/// otherwise normalized.
///
/// # Examples
///
/// ```
/// use release_parser::is_build_hash;
///
/// assert!(is_build_hash("085240e737828d8326719bf97730188e927e49ca"));
/// assert!(is_build_hash("DEADBEEFDEAD"));
/// assert!(!is_build_hash("1.0.0"));
/// assert!(!is_build_hash("deadbeef"));
/// ```
pub fn is_build_hash(s: &str) -> bool {
    BUILD_HASH_LENGTHS.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_lengths() {
        for len in [12, 16, 20, 32, 40, 64] {
            assert!(is_build_hash(&"a".repeat(len)), "length {len}");
        }
    }

    #[test]
    fn rejected_lengths() {
        for len in [0, 1, 7, 11, 13, 39, 41, 63, 65, 128] {
            assert!(!is_build_hash(&"a".repeat(len)), "length {len}");
        }
    }

    #[test]
    fn mixed_case() {
        assert!(is_build_hash("DeadBeefDeadBeefDeadBeefDeadBeef"));
    }

    #[test]
    fn non_hex_character() {
        assert!(!is_build_hash("085240e737828d8326719bf97730188e927e49cg"));
        assert!(!is_build_hash("085240e737828d8326719bf97730188e927e49c "));
    }

    #[test]
    fn multibyte_input() {
        // 12 bytes but not hex
        assert!(!is_build_hash("éééééé"));
    }
}
