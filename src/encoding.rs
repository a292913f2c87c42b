use crate::charset;
use crate::options::{EscapeOptions, SpacePolicy};

/// Computes the exact output length of [`escape_presized`]/[`escape_growable`]
/// without building the output.
///
/// Each input byte contributes 1 if it passes through (allowed by the
/// profile, or a space turned into `+`), otherwise 3 for `%XX`. Any change
/// to the per-byte encoding rule below must be mirrored here; the crate
/// tests enforce the agreement for arbitrary inputs.
pub(crate) fn encoded_len(data: &[u8], options: &EscapeOptions) -> usize {
    let allowed = options.profile.allowed();
    let plus_for_space = options.space == SpacePolicy::Plus;
    let mut len = 0;
    for &byte in data {
        if allowed[byte as usize] || (byte == charset::SPACE && plus_for_space) {
            len += 1;
        } else {
            len += 3;
        }
    }
    len
}

/// Escapes into a buffer presized by [`encoded_len`], writing in place.
pub(crate) fn escape_presized(data: &[u8], options: &EscapeOptions) -> Vec<u8> {
    let allowed = options.profile.allowed();
    let hex = options.hex_case.digits();
    let plus_for_space = options.space == SpacePolicy::Plus;

    let mut out = vec![0u8; encoded_len(data, options)];
    let mut at = 0;
    for &byte in data {
        if allowed[byte as usize] {
            out[at] = byte;
            at += 1;
        } else if byte == charset::SPACE && plus_for_space {
            out[at] = b'+';
            at += 1;
        } else {
            out[at] = b'%';
            out[at + 1] = hex[(byte >> 4) as usize];
            out[at + 2] = hex[(byte & 0x0F) as usize];
            at += 3;
        }
    }
    debug_assert_eq!(at, out.len());
    out
}

/// Escapes by appending to a growable buffer. Output-identical to
/// [`escape_presized`]; retained for the benchmark harness.
pub(crate) fn escape_growable(data: &[u8], options: &EscapeOptions) -> Vec<u8> {
    let allowed = options.profile.allowed();
    let hex = options.hex_case.digits();
    let plus_for_space = options.space == SpacePolicy::Plus;

    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        if allowed[byte as usize] {
            out.push(byte);
        } else if byte == charset::SPACE && plus_for_space {
            out.push(b'+');
        } else {
            out.push(b'%');
            out.push(hex[(byte >> 4) as usize]);
            out.push(hex[(byte & 0x0F) as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HexCase;
    use crate::profile::Profile;

    fn opts(profile: Profile, hex_case: HexCase, space: SpacePolicy) -> EscapeOptions {
        EscapeOptions::new(profile, hex_case, space)
    }

    #[test]
    fn test_empty_input() {
        let options = EscapeOptions::DEFAULT;
        assert_eq!(escape_presized(b"", &options), b"");
        assert_eq!(escape_growable(b"", &options), b"");
        assert_eq!(encoded_len(b"", &options), 0);
    }

    #[test]
    fn test_nul_byte() {
        let options = EscapeOptions::DEFAULT;
        assert_eq!(escape_presized(&[0x00], &options), b"%00");
        assert_eq!(encoded_len(&[0x00], &options), 3);
    }

    #[test]
    fn test_space_policies() {
        let plus = opts(Profile::FormEncode, HexCase::Upper, SpacePolicy::Plus);
        assert_eq!(escape_presized(b" ", &plus), b"+");
        assert_eq!(encoded_len(b" ", &plus), 1);

        let percent = EscapeOptions::DEFAULT;
        assert_eq!(escape_presized(b" ", &percent), b"%20");
        assert_eq!(encoded_len(b" ", &percent), 3);
    }

    #[test]
    fn test_hello_world_form_encode() {
        let options = opts(Profile::FormEncode, HexCase::Upper, SpacePolicy::Plus);
        assert_eq!(escape_presized(b"Hello World!", &options), b"Hello+World!");
    }

    #[test]
    fn test_hello_world_strict() {
        let options = EscapeOptions::DEFAULT;
        assert_eq!(
            escape_presized(b"Hello World!", &options),
            b"Hello%20World%21"
        );
        assert_eq!(encoded_len(b"Hello World!", &options), 16);
    }

    #[test]
    fn test_lowercase_hex() {
        let options = opts(Profile::UnreservedOnly, HexCase::Lower, SpacePolicy::Percent);
        assert_eq!(escape_presized(&[0xC3, 0xA4], &options), b"%c3%a4");
    }

    #[test]
    fn test_plus_substitution_only_applies_to_space() {
        // 0x2B ('+') itself is not allowed under FormEncode and must escape.
        let options = opts(Profile::FormEncode, HexCase::Upper, SpacePolicy::Plus);
        assert_eq!(escape_presized(b"+", &options), b"%2B");
    }
}
