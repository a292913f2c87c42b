use crate::charset::{self, ByteSet};

/// Compliance profile selecting which bytes pass through unescaped.
///
/// Every profile is a fixed subset of printable ASCII; control bytes, space,
/// and anything >= 0x80 are always percent-encoded regardless of profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Alphanumerics plus `-_.~`. Reproduces strict "escape data string"
    /// behavior and is the documented default.
    #[default]
    UnreservedOnly,
    /// Alphanumerics plus `-_.!~*'()`, the permissive unreserved set.
    AllUnreserved,
    /// Alphanumerics plus `-_.!*()`. Reproduces legacy form/query
    /// "URL encoding" when combined with `SpacePolicy::Plus`.
    FormEncode,
}

impl Profile {
    pub const ALL: [Profile; 3] = [
        Profile::UnreservedOnly,
        Profile::AllUnreserved,
        Profile::FormEncode,
    ];

    /// Returns the precomputed allowed-byte table for this profile.
    pub fn allowed(&self) -> &'static ByteSet {
        match self {
            Profile::UnreservedOnly => &charset::UNRESERVED_ONLY,
            Profile::AllUnreserved => &charset::ALL_UNRESERVED,
            Profile::FormEncode => &charset::FORM_ENCODE,
        }
    }

    /// Whether `byte` passes through unescaped under this profile.
    pub fn allows(&self, byte: u8) -> bool {
        self.allowed()[byte as usize]
    }

    /// Resolves a selector name to a profile.
    ///
    /// Unknown selectors fall back to the default profile instead of
    /// erroring. This leniency is deliberate and load-bearing: preset files
    /// and flag strings from older callers must keep encoding something
    /// deterministic rather than failing.
    pub fn resolve(selector: &str) -> Profile {
        match selector.trim().to_ascii_lowercase().as_str() {
            "unreserved-only" | "data-string" | "strict" => Profile::UnreservedOnly,
            "all-unreserved" | "unreserved" => Profile::AllUnreserved,
            "form-encode" | "url-encode" | "form" => Profile::FormEncode,
            _ => Profile::default(),
        }
    }

    /// Canonical selector name, the inverse of [`Profile::resolve`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::UnreservedOnly => "unreserved-only",
            Profile::AllUnreserved => "all-unreserved",
            Profile::FormEncode => "form-encode",
        }
    }
}
