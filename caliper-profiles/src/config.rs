//! Runtime configuration: reads `caliper.toml` and decides which action
//! bundle profiles are localized with.

use crate::error::ProfileResult;
use crate::localize::Bundle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name looked up in the working directory by [`CaliperConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "caliper.toml";

/// Localization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Locale tag of the bundle in use. Informational only.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Optional TOML bundle layered over the built-in English actions.
    #[serde(default)]
    pub bundle: Option<PathBuf>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            bundle: None,
        }
    }
}

/// Configuration parsed from `caliper.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaliperConfig {
    #[serde(default)]
    pub localization: LocalizationConfig,
}

impl CaliperConfig {
    /// Loads `caliper.toml` from the working directory if it exists.
    pub fn load() -> Self {
        Self::load_from(PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration from an explicit path.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(config_path: PathBuf) -> Self {
        if !config_path.exists() {
            info!("No config file found at {:?}, using defaults", config_path);
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<CaliperConfig>(&contents) {
                Ok(mut config) => {
                    info!("Loaded config from {:?}", config_path);
                    config.resolve_relative_to(&config_path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        config_path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Bundle paths in the file are relative to the file itself.
    fn resolve_relative_to(&mut self, config_path: &Path) {
        if let (Some(bundle), Some(dir)) = (&self.localization.bundle, config_path.parent()) {
            if bundle.is_relative() {
                self.localization.bundle = Some(dir.join(bundle));
            }
        }
    }

    /// The action bundle profiles should be localized with.
    pub fn localizer(&self) -> ProfileResult<Bundle> {
        let base = Bundle::default_actions();
        match &self.localization.bundle {
            None => Ok(base),
            Some(path) => {
                let overlay = Bundle::load_from(path)?;
                info!(
                    "Using {} action bundle from {:?} ({} entries)",
                    self.localization.locale,
                    path,
                    overlay.len()
                );
                Ok(base.merged(overlay))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_bundle() {
        let config = CaliperConfig::default();
        assert_eq!(config.localization.locale, "en-US");
        assert_eq!(config.localizer().unwrap(), Bundle::default_actions());
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
[localization]
locale = "fr-FR"
bundle = "actions.fr.toml"
"#;
        let config: CaliperConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.localization.locale, "fr-FR");
        assert_eq!(config.localization.bundle, Some(PathBuf::from("actions.fr.toml")));
    }

    #[test]
    fn empty_config_is_default() {
        let config: CaliperConfig = toml::from_str("").unwrap();
        assert_eq!(config, CaliperConfig::default());
    }
}
