use crate::shared::i18n::Language;
use crate::shared::settings::Theme;
use serde::Deserialize;
use thiserror::Error;

use super::list::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Rows per page on the data-management screens
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_language: Language::default(),
            default_theme: Theme::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ui.page_size must be greater than zero")]
    ZeroPageSize,
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[ui]
page_size = 5
default_language = "en"
default_theme = "light"
"#;

/// Parse and validate a TOML configuration document
pub fn load_config(source: &str) -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Embedded configuration, or built-in defaults if it does not load
pub fn default_config() -> ConsoleConfig {
    match load_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("embedded configuration rejected, using defaults: {}", e);
            ConsoleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.ui.page_size, 5);
        assert_eq!(config.ui.default_language, Language::En);
        assert_eq!(config.ui.default_theme, Theme::Light);
        assert_eq!(default_config(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config("[ui]\ndefault_language = \"ja\"\n").unwrap();
        assert_eq!(config.ui.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.ui.default_language, Language::Ja);

        let config = load_config("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = load_config("[ui]\npage_size = 0\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroPageSize)
        );
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(load_config("[ui]\ndefault_language = \"fr\"\n").is_err());
    }
}
