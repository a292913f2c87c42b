mod charset;
mod config;
mod encoding;
mod options;
mod profile;
mod text;

pub use config::{PresetConfig, PresetsConfig};
pub use options::{EscapeOptions, HexCase, SpacePolicy, Strategy};
pub use profile::Profile;
pub use text::{EscapeError, TextEncoding};

/// Percent-encodes raw bytes, returning the encoded bytes.
///
/// Output is a pure function of `data` and the profile, hex case, and space
/// policy in `options`; the construction strategy only affects how the
/// buffer is assembled.
pub fn escape_to_bytes(data: &[u8], options: &EscapeOptions) -> Vec<u8> {
    match options.strategy {
        Strategy::Presized => encoding::escape_presized(data, options),
        Strategy::Growable => encoding::escape_growable(data, options),
    }
}

/// Percent-encodes raw bytes, returning the encoded text.
pub fn escape_bytes(data: &[u8], options: &EscapeOptions) -> String {
    text::into_ascii_string(escape_to_bytes(data, options))
}

/// Percent-encodes text, converting it to bytes as UTF-8 (no byte-order
/// mark) first.
pub fn escape(data: &str, options: &EscapeOptions) -> String {
    escape_bytes(data.as_bytes(), options)
}

/// Percent-encodes text converted with an explicit byte encoding.
pub fn escape_with_encoding(
    data: &str,
    encoding: TextEncoding,
    options: &EscapeOptions,
) -> Result<String, EscapeError> {
    text::escape_text(data, encoding, options)
}

/// Computes the exact length [`escape_to_bytes`] would produce, without
/// building the output. Invoke this once to presize a buffer, then escape.
pub fn encoded_len(data: &[u8], options: &EscapeOptions) -> usize {
    encoding::encoded_len(data, options)
}

/// [`encoded_len`] over text, converted as UTF-8.
pub fn encoded_len_str(data: &str, options: &EscapeOptions) -> usize {
    encoding::encoded_len(data.as_bytes(), options)
}

/// [`encoded_len`] over text converted with an explicit byte encoding.
pub fn encoded_len_with_encoding(
    data: &str,
    encoding: TextEncoding,
    options: &EscapeOptions,
) -> Result<usize, EscapeError> {
    text::encoded_len_text(data, encoding, options)
}
