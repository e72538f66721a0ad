//! Localization of action keys.
//!
//! The registry only needs `key -> display string`. [`Bundle`] is the stock
//! implementation: a flat table, either the built-in English vocabulary or
//! one loaded from a TOML file with an `[actions]` table.

use crate::error::{ProfileError, ProfileResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors a [`Localizer`] can return for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizeError {
    #[error("no display string for key '{0}'")]
    MissingKey(String),

    #[error("empty display string for key '{0}'")]
    EmptyValue(String),
}

/// Resolves an action key to its locale-specific display string.
pub trait Localizer: Send + Sync {
    fn resolve(&self, key: &str) -> Result<String, LocalizeError>;
}

const VOCAB: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#";

/// Built-in English display strings: each action key maps to its vocabulary IRI.
const DEFAULT_ACTIONS: &[(&str, &str)] = &[
    ("session.loggedIn", "LoggedIn"),
    ("session.loggedOut", "LoggedOut"),
    ("session.timedOut", "TimedOut"),
    ("reading.navigatedTo", "NavigatedTo"),
    ("reading.viewed", "Viewed"),
];

/// A flat `key -> display string` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// An empty bundle; every lookup fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English action bundle.
    #[must_use]
    pub fn default_actions() -> Self {
        DEFAULT_ACTIONS
            .iter()
            .map(|(key, term)| (key.to_string(), format!("{VOCAB}{term}")))
            .collect()
    }

    /// Parses a bundle from TOML text with an `[actions]` table.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: BundleFile = toml::from_str(contents)?;
        Ok(Self {
            entries: file.actions,
        })
    }

    /// Loads a bundle from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ProfileError::BundleIo {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents).map_err(|e| ProfileError::BundleParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Adds or replaces one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, display: impl Into<String>) -> Self {
        self.entries.insert(key.into(), display.into());
        self
    }

    /// Layers `other` over this bundle; its entries win.
    #[must_use]
    pub fn merged(mut self, other: Bundle) -> Self {
        self.entries.extend(other.entries);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Localizer for Bundle {
    fn resolve(&self, key: &str) -> Result<String, LocalizeError> {
        match self.get(key) {
            Some(display) if display.is_empty() => Err(LocalizeError::EmptyValue(key.to_string())),
            Some(display) => Ok(display.to_string()),
            None => Err(LocalizeError::MissingKey(key.to_string())),
        }
    }
}

/// Raw TOML structure of a bundle file.
#[derive(Deserialize)]
struct BundleFile {
    #[serde(default)]
    actions: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_actions_cover_every_profile_key() {
        let bundle = Bundle::default_actions();
        assert_eq!(bundle.len(), DEFAULT_ACTIONS.len());
        assert_eq!(
            bundle.resolve("session.loggedIn").unwrap(),
            "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedIn"
        );
    }

    #[test]
    fn empty_display_is_an_error() {
        let bundle = Bundle::new().with_entry("k", "");
        assert_eq!(bundle.resolve("k"), Err(LocalizeError::EmptyValue("k".into())));
    }

    #[test]
    fn parse_bundle_toml() {
        let toml_str = r#"
[actions]
"session.loggedIn" = "Connecté"
"session.loggedOut" = "Déconnecté"
"#;
        let bundle = Bundle::from_toml_str(toml_str).unwrap();
        assert_eq!(bundle.get("session.loggedIn"), Some("Connecté"));
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn merged_overrides_entries() {
        let base = Bundle::default_actions();
        let over = Bundle::new().with_entry("session.loggedIn", "Signed in");
        let merged = base.merged(over);
        assert_eq!(merged.get("session.loggedIn"), Some("Signed in"));
        assert_eq!(merged.len(), DEFAULT_ACTIONS.len());
    }
}
