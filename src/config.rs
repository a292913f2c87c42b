use serde::Deserialize;
use std::collections::HashMap;

use crate::options::{EscapeOptions, HexCase, SpacePolicy, Strategy};
use crate::profile::Profile;

/// A named combination of encoding axes, as written in `profiles.toml`.
///
/// Axis values are kept as strings and resolved leniently: an unknown
/// profile, hex case, or space policy falls back to the documented default
/// instead of failing the whole config.
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub hex_case: String,
    #[serde(default)]
    pub space: String,
}

impl PresetConfig {
    /// Resolves this preset into concrete options.
    pub fn options(&self) -> EscapeOptions {
        EscapeOptions {
            profile: Profile::resolve(&self.profile),
            hex_case: HexCase::resolve(&self.hex_case),
            space: SpacePolicy::resolve(&self.space),
            strategy: Strategy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PresetsConfig {
    pub presets: HashMap<String, PresetConfig>,
}

impl PresetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../profiles.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in presets
    /// 2. Override with ~/.config/percent-d/profiles.toml if it exists
    /// 3. Override with ./profiles.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("percent-d").join("profiles.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("profiles.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing presets
    pub fn merge(&mut self, other: PresetsConfig) {
        for (name, preset) in other.presets {
            self.presets.insert(name, preset);
        }
    }

    pub fn get_preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_load() {
        let config = PresetsConfig::load_default().unwrap();
        for name in ["data-string", "url-encode", "unreserved", "query-lower"] {
            assert!(config.get_preset(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn test_url_encode_preset_resolves_to_form_encoding() {
        let config = PresetsConfig::load_default().unwrap();
        let options = config.get_preset("url-encode").unwrap().options();
        assert_eq!(options.profile, Profile::FormEncode);
        assert_eq!(options.hex_case, HexCase::Upper);
        assert_eq!(options.space, SpacePolicy::Plus);
    }

    #[test]
    fn test_data_string_preset_matches_default_options() {
        let config = PresetsConfig::load_default().unwrap();
        let options = config.get_preset("data-string").unwrap().options();
        assert_eq!(options, EscapeOptions::DEFAULT);
    }

    #[test]
    fn test_unknown_axis_values_fall_back() {
        let config = PresetsConfig::from_toml(
            r#"
            [presets.weird]
            profile = "no-such-profile"
            hex_case = "sideways"
            space = "tab"
            "#,
        )
        .unwrap();
        let options = config.get_preset("weird").unwrap().options();
        assert_eq!(options, EscapeOptions::DEFAULT);
    }

    #[test]
    fn test_merge_overrides_existing_preset() {
        let mut config = PresetsConfig::load_default().unwrap();
        let overrides = PresetsConfig::from_toml(
            r#"
            [presets.data-string]
            profile = "form-encode"
            hex_case = "lower"
            space = "plus"
            "#,
        )
        .unwrap();
        config.merge(overrides);
        let options = config.get_preset("data-string").unwrap().options();
        assert_eq!(options.profile, Profile::FormEncode);
        assert_eq!(options.hex_case, HexCase::Lower);
    }
}
