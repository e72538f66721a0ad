//! Error types for profile definition.

use crate::localize::LocalizeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while defining a profile or loading its bundle.
///
/// All of these surface when a registry is built, never while an event is
/// being validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The same action key was registered twice.
    #[error("duplicate action key '{0}'")]
    DuplicateActionKey(String),

    /// Two distinct keys resolved to the same display string.
    #[error("display string '{display}' is shared by actions '{first}' and '{second}'")]
    DuplicateDisplayString {
        display: String,
        first: String,
        second: String,
    },

    /// A profile tried to register the sentinel key itself.
    #[error("action key '{0}' is reserved")]
    ReservedActionKey(String),

    /// The localizer could not resolve a registered key.
    #[error("failed to localize action '{key}': {source}")]
    Localization {
        key: String,
        #[source]
        source: LocalizeError,
    },

    /// A bundle file could not be read.
    #[error("failed to read bundle {path:?}: {message}")]
    BundleIo { path: PathBuf, message: String },

    /// A bundle file is not valid TOML.
    #[error("failed to parse bundle {path:?}: {message}")]
    BundleParse { path: PathBuf, message: String },
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
