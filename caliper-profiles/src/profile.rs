use crate::error::ProfileResult;
use crate::localize::Localizer;
use crate::registry::{ActionDefinition, ActionRegistry};
use caliper_conformance::{ValidatorResult, Violation};
use caliper_model::Event;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// A named, closed set of actions and the validators bound to them.
///
/// The action registry is built lazily, exactly once, the first time the
/// profile is used. Concurrent first callers wait for that one build and
/// never observe a partial registry. A failed build is kept too; it is
/// reported by [`Profile::initialize`] and every later use sees the same
/// error.
pub struct Profile {
    name: String,
    definitions: Vec<ActionDefinition>,
    localizer: Arc<dyn Localizer>,
    registry: OnceLock<ProfileResult<ActionRegistry>>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        definitions: Vec<ActionDefinition>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            name: name.into(),
            definitions,
            localizer,
            registry: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the registry now rather than on first validation.
    pub fn initialize(&self) -> ProfileResult<()> {
        self.registry().map(|_| ())
    }

    /// The profile's frozen action registry.
    pub fn registry(&self) -> ProfileResult<&ActionRegistry> {
        self.registry
            .get_or_init(|| {
                let built =
                    ActionRegistry::build(&self.name, &self.definitions, self.localizer.as_ref());
                if let Err(e) = &built {
                    warn!("Failed to build action registry for profile {}: {}", self.name, e);
                }
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Validates an event against this profile.
    ///
    /// Never fails: the result lists every violation found. If the registry
    /// could not be built, no action is recognized and the result holds a
    /// single `ActionUnrecognized`.
    pub fn validate_event(&self, event: &Event) -> ValidatorResult {
        match self.registry() {
            Ok(registry) => registry.dispatch(event),
            Err(_) => ValidatorResult::single(Violation::action_unrecognized(event.action())),
        }
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("definitions", &self.definitions)
            .field("initialized", &self.registry.get().is_some())
            .finish()
    }
}
