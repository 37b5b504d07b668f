use crate::shared::form_state::NumericPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub inventory: InventoryConfig,
    pub forms: FormsConfig,
    pub settings: SettingsPageConfig,
    pub eco_score: EcoScoreConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Stock below this value is highlighted
    pub low_stock_threshold: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub numeric_policy: NumericPolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SettingsPageConfig {
    /// How long the "Settings saved" banner stays visible
    pub success_banner_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EcoScoreConfig {
    pub high: u8,
    pub medium: u8,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 100,
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            numeric_policy: NumericPolicy::Lenient,
        }
    }
}

impl Default for SettingsPageConfig {
    fn default() -> Self {
        Self {
            success_banner_ms: 3000,
        }
    }
}

impl Default for EcoScoreConfig {
    fn default() -> Self {
        Self { high: 90, medium: 70 }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::default(),
            forms: FormsConfig::default(),
            settings: SettingsPageConfig::default(),
            eco_score: EcoScoreConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[inventory]
low_stock_threshold = 100

[forms]
numeric_policy = "lenient"

[settings]
success_banner_ms = 3000

[eco_score]
high = 90
medium = 70
"#;

impl DashboardConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load the dashboard configuration.
///
/// The app is a static bundle without a config file, so this parses the
/// embedded defaults and falls back to `Default` if they ever stop parsing.
pub fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using built-in defaults", e);
            DashboardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(load_config().inventory.low_stock_threshold, 100);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [forms]
            numeric_policy = "strict"
            "#,
        )
        .unwrap();
        assert_eq!(config.forms.numeric_policy, NumericPolicy::Strict);
        assert_eq!(config.settings.success_banner_ms, 3000);
        assert_eq!(config.eco_score.high, 90);
    }

    #[test]
    fn test_invalid_policy_is_an_error() {
        let err = DashboardConfig::from_toml_str("[forms]\nnumeric_policy = \"sloppy\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid dashboard configuration"));
    }
}
