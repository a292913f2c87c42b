//! Byte classification tables.
//!
//! The base character classes are fixed ASCII sets taken straight from
//! RFC 2396 terminology (lowalpha, upalpha, digit, mark, reserved, and the
//! delimiter/unwise punctuation). The allowed-byte tables for each compliance
//! profile are assembled from them at compile time and never mutated.

pub const LOWALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT: &[u8] = b"0123456789";
pub const MARK: &[u8] = b"-_.!~*'()";
pub const RESERVED: &[u8] = b";/?:@&=+$,";
pub const DELIMS: &[u8] = b"<>#%\"";
pub const UNWISE: &[u8] = b"{}|\\^[]`";
pub const SPACE: u8 = 0x20;

pub const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";
pub const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// 256-entry membership table indexed by byte value.
pub type ByteSet = [bool; 256];

const fn add_class(mut set: ByteSet, class: &[u8]) -> ByteSet {
    let mut i = 0;
    while i < class.len() {
        set[class[i] as usize] = true;
        i += 1;
    }
    set
}

const fn alphanumeric() -> ByteSet {
    let set = add_class([false; 256], LOWALPHA);
    let set = add_class(set, UPALPHA);
    add_class(set, DIGIT)
}

/// Alphanumerics plus `-_.~` (RFC 3986 unreserved).
pub(crate) const UNRESERVED_ONLY: ByteSet = add_class(alphanumeric(), b"-_.~");

/// Alphanumerics plus the full mark set `-_.!~*'()` (RFC 2396 unreserved).
pub(crate) const ALL_UNRESERVED: ByteSet = add_class(alphanumeric(), MARK);

/// Alphanumerics plus `-_.!*()`, the legacy form-encoding survivors.
pub(crate) const FORM_ENCODE: ByteSet = add_class(alphanumeric(), b"-_.!*()");

#[cfg(test)]
mod tests {
    use super::*;

    fn members(set: &ByteSet) -> Vec<u8> {
        (0u16..256)
            .map(|b| b as u8)
            .filter(|&b| set[b as usize])
            .collect()
    }

    #[test]
    fn test_unreserved_only_members() {
        let mut expected: Vec<u8> = Vec::new();
        expected.extend_from_slice(DIGIT);
        expected.extend_from_slice(UPALPHA);
        expected.extend_from_slice(LOWALPHA);
        expected.extend_from_slice(b"-_.~");
        expected.sort_unstable();
        assert_eq!(members(&UNRESERVED_ONLY), expected);
    }

    #[test]
    fn test_all_unreserved_is_unreserved_plus_marks() {
        for &b in MARK {
            assert!(ALL_UNRESERVED[b as usize], "mark {:?} missing", b as char);
        }
        for b in 0u16..256 {
            if UNRESERVED_ONLY[b as usize] {
                assert!(ALL_UNRESERVED[b as usize]);
            }
        }
    }

    #[test]
    fn test_form_encode_excludes_tilde_and_quote() {
        assert!(!FORM_ENCODE[b'~' as usize]);
        assert!(!FORM_ENCODE[b'\'' as usize]);
        for &b in b"-_.!*()" {
            assert!(FORM_ENCODE[b as usize]);
        }
    }

    #[test]
    fn test_no_profile_allows_control_space_or_high_bytes() {
        for set in [&UNRESERVED_ONLY, &ALL_UNRESERVED, &FORM_ENCODE] {
            for b in 0x00u8..=0x1F {
                assert!(!set[b as usize]);
            }
            assert!(!set[SPACE as usize]);
            assert!(!set[0x7F]);
            for b in 0x80u16..256 {
                assert!(!set[b as usize]);
            }
        }
    }

    #[test]
    fn test_reserved_and_delims_never_allowed() {
        for set in [&UNRESERVED_ONLY, &ALL_UNRESERVED, &FORM_ENCODE] {
            for &b in RESERVED.iter().chain(DELIMS).chain(UNWISE) {
                assert!(!set[b as usize], "{:?} should be escaped", b as char);
            }
        }
    }
}
