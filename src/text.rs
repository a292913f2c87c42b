use std::borrow::Cow;
use std::fmt;

use crate::options::EscapeOptions;

/// Byte encodings accepted for textual input.
///
/// The default is UTF-8 without a byte-order mark. Latin-1 covers callers
/// that need the historical single-byte mapping over U+0000..=U+00FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Lenient selector lookup; unknown names fall back to UTF-8.
    pub fn resolve(selector: &str) -> TextEncoding {
        match selector.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => TextEncoding::Latin1,
            _ => TextEncoding::Utf8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, EscapeError> {
        match self {
            TextEncoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for character in text.chars() {
                    let codepoint = character as u32;
                    if codepoint > 0xFF {
                        return Err(EscapeError::Unmappable {
                            character,
                            encoding: self.as_str(),
                        });
                    }
                    bytes.push(codepoint as u8);
                }
                Ok(Cow::Owned(bytes))
            }
        }
    }
}

/// Errors that can occur while preparing text for escaping.
///
/// Escaping itself never fails: every byte value 0..=255 is representable
/// in output.
#[derive(Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// The input contains a character the requested byte encoding cannot
    /// represent
    Unmappable {
        character: char,
        encoding: &'static str,
    },
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeError::Unmappable {
                character,
                encoding,
            } => write!(
                f,
                "Character '{}' (U+{:04X}) cannot be represented in {}",
                character, *character as u32, encoding
            ),
        }
    }
}

impl std::error::Error for EscapeError {}

/// Converts encoder output to a `String`. Safe because every byte the
/// encoder emits is ASCII.
pub(crate) fn into_ascii_string(bytes: Vec<u8>) -> String {
    debug_assert!(bytes.is_ascii());
    String::from_utf8(bytes).expect("escaped output is always ASCII")
}

pub(crate) fn escape_text(
    text: &str,
    encoding: TextEncoding,
    options: &EscapeOptions,
) -> Result<String, EscapeError> {
    let bytes = encoding.encode(text)?;
    Ok(into_ascii_string(crate::escape_to_bytes(&bytes, options)))
}

pub(crate) fn encoded_len_text(
    text: &str,
    encoding: TextEncoding,
    options: &EscapeOptions,
) -> Result<usize, EscapeError> {
    let bytes = encoding.encode(text)?;
    Ok(crate::encoded_len(&bytes, options))
}
