//! Action registry: canonical keys, their validators, and the reverse index.

use crate::error::{ProfileError, ProfileResult};
use crate::localize::Localizer;
use crate::validator::{StructuralValidator, UnrecognizedValidator};
use caliper_conformance::ValidatorResult;
use caliper_model::Event;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Key of the sentinel action every registry falls back to.
pub const UNRECOGNIZED: &str = "action.unrecognized";

/// An action key bound to its structural validator.
#[derive(Clone)]
pub struct ActionDefinition {
    key: String,
    validator: Arc<dyn StructuralValidator>,
}

impl ActionDefinition {
    pub fn new(key: impl Into<String>, validator: impl StructuralValidator + 'static) -> Self {
        Self {
            key: key.into(),
            validator: Arc::new(validator),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ActionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDefinition")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

struct RegisteredAction {
    display: String,
    validator: Arc<dyn StructuralValidator>,
}

/// The frozen action table of one profile.
///
/// Built once from the profile's definitions; every key's display string is
/// resolved exactly once, here. After `build` returns nothing in the
/// registry changes, so it can be shared freely across threads.
///
/// The [`UNRECOGNIZED`] action is always present: `contains_key` and
/// `validator` report it for every registry, including an empty one. It has
/// no display string, so no action string ever resolves to it except by
/// falling through, and it is not counted by `len` or listed by `keys`.
pub struct ActionRegistry {
    profile: String,
    actions: HashMap<String, RegisteredAction>,
    /// Display string -> canonical key.
    reverse: HashMap<String, String>,
    unrecognized: UnrecognizedValidator,
}

impl ActionRegistry {
    /// Resolves every definition through `localizer` and freezes the table.
    ///
    /// Fails on a repeated key, a reserved key, a key the localizer cannot
    /// resolve, or two keys sharing one display string.
    pub fn build(
        profile: &str,
        definitions: &[ActionDefinition],
        localizer: &dyn Localizer,
    ) -> ProfileResult<Self> {
        let mut actions = HashMap::with_capacity(definitions.len());
        let mut reverse: HashMap<String, String> = HashMap::with_capacity(definitions.len());

        for def in definitions {
            if def.key == UNRECOGNIZED {
                return Err(ProfileError::ReservedActionKey(def.key.clone()));
            }
            if actions.contains_key(&def.key) {
                return Err(ProfileError::DuplicateActionKey(def.key.clone()));
            }

            let display_str = localizer
                .resolve(&def.key)
                .map_err(|source| ProfileError::Localization {
                    key: def.key.clone(),
                    source,
                })?;
            if let Some(first) = reverse.get(&display_str) {
                return Err(ProfileError::DuplicateDisplayString {
                    display: display_str,
                    first: first.clone(),
                    second: def.key.clone(),
                });
            }

            debug!("Registering action {} as {:?} in profile {}", def.key, display_str, profile);
            reverse.insert(display_str.clone(), def.key.clone());
            actions.insert(
                def.key.clone(),
                RegisteredAction {
                    display: display_str,
                    validator: Arc::clone(&def.validator),
                },
            );
        }

        info!("Action registry for profile {} built with {} actions", profile, actions.len());
        Ok(Self {
            profile: profile.to_string(),
            actions,
            reverse,
            unrecognized: UnrecognizedValidator,
        })
    }

    /// Name of the profile this registry belongs to.
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Returns true if `key` is a registered canonical key or the sentinel.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        key == UNRECOGNIZED || self.actions.contains_key(key)
    }

    /// Validator bound to `key`; the sentinel's for any key not registered.
    #[must_use]
    pub fn validator(&self, key: &str) -> &dyn StructuralValidator {
        match self.actions.get(key) {
            Some(action) => action.validator.as_ref(),
            None => &self.unrecognized,
        }
    }

    /// Canonical key whose display string is exactly `action`, or
    /// [`UNRECOGNIZED`].
    #[must_use]
    pub fn lookup_key(&self, action: &str) -> &str {
        self.reverse
            .get(action)
            .map(String::as_str)
            .unwrap_or(UNRECOGNIZED)
    }

    /// Display string a registered key resolved to.
    #[must_use]
    pub fn display_string(&self, key: &str) -> Option<&str> {
        self.actions.get(key).map(|a| a.display.as_str())
    }

    /// Keys registered by the profile, in no particular order. The sentinel
    /// is not listed.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Resolves the event's raw action and runs the validator bound to it.
    pub fn dispatch(&self, event: &Event) -> ValidatorResult {
        let key = self.lookup_key(event.action());
        trace!("Dispatching {:?} to {} in profile {}", event.action(), key, self.profile);
        self.validator(key).validate(event)
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ActionRegistry")
            .field("profile", &self.profile)
            .field("actions", &keys)
            .finish()
    }
}
