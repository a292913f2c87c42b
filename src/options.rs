use crate::charset;
use crate::profile::Profile;

/// Glyph case for emitted hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

impl HexCase {
    /// The sixteen hex digit glyphs for this case.
    pub fn digits(&self) -> &'static [u8; 16] {
        match self {
            HexCase::Upper => charset::HEX_UPPER,
            HexCase::Lower => charset::HEX_LOWER,
        }
    }

    /// Lenient selector lookup; unknown names fall back to the default.
    pub fn resolve(selector: &str) -> HexCase {
        match selector.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => HexCase::Lower,
            "upper" | "uppercase" => HexCase::Upper,
            _ => HexCase::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HexCase::Upper => "upper",
            HexCase::Lower => "lower",
        }
    }
}

/// How the space byte (0x20) is represented in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacePolicy {
    /// Percent-encode as `%20`, like any other disallowed byte.
    #[default]
    Percent,
    /// Substitute `+`, the legacy form-encoding convention.
    Plus,
}

impl SpacePolicy {
    /// Lenient selector lookup; unknown names fall back to the default.
    pub fn resolve(selector: &str) -> SpacePolicy {
        match selector.trim().to_ascii_lowercase().as_str() {
            "plus" | "+" => SpacePolicy::Plus,
            "percent" | "%20" => SpacePolicy::Percent,
            _ => SpacePolicy::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpacePolicy::Percent => "percent",
            SpacePolicy::Plus => "plus",
        }
    }
}

/// Internal buffer-assembly strategy. Output-equivalent by contract; kept as
/// an axis only so the benchmark harness can compare the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Size the output with the length calculator, then write in place.
    #[default]
    Presized,
    /// Append to a growable buffer.
    Growable,
}

/// The full set of encoding options.
///
/// For a fixed profile, hex case, and space policy the output is a pure
/// function of the input bytes; `strategy` never affects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EscapeOptions {
    pub profile: Profile,
    pub hex_case: HexCase,
    pub space: SpacePolicy,
    pub strategy: Strategy,
}

impl EscapeOptions {
    /// The named default every entry point uses when options are omitted:
    /// strict unreserved escaping, uppercase hex, `%20` for space.
    pub const DEFAULT: EscapeOptions = EscapeOptions {
        profile: Profile::UnreservedOnly,
        hex_case: HexCase::Upper,
        space: SpacePolicy::Percent,
        strategy: Strategy::Presized,
    };

    pub fn new(profile: Profile, hex_case: HexCase, space: SpacePolicy) -> Self {
        EscapeOptions {
            profile,
            hex_case,
            space,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
