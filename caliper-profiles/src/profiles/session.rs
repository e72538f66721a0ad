//! Session profile: logging in, logging out and timing out.

use crate::localize::{Bundle, Localizer};
use crate::profile::Profile;
use crate::registry::ActionDefinition;
use crate::validator::{RoleRule, RoleValidator};
use caliper_conformance::ValidatorResult;
use caliper_model::Event;
use caliper_types::{EntityCategory, EventType, ParticipantRole};
use std::sync::{Arc, OnceLock};

pub const NAME: &str = "session";

pub const LOGGED_IN: &str = "session.loggedIn";
pub const LOGGED_OUT: &str = "session.loggedOut";
pub const TIMED_OUT: &str = "session.timedOut";

/// The session profile's action definitions.
#[must_use]
pub fn actions() -> Vec<ActionDefinition> {
    use EntityCategory as C;
    use ParticipantRole as R;

    vec![
        ActionDefinition::new(
            LOGGED_IN,
            RoleValidator::new(EventType::SessionEvent)
                .rule(RoleRule::required(R::Actor, C::Person))
                .rule(RoleRule::required(R::Object, C::SoftwareApplication))
                .rule(RoleRule::optional(R::Generated, C::Session))
                .rule(RoleRule::optional(R::Target, C::DigitalResource)),
        ),
        ActionDefinition::new(
            LOGGED_OUT,
            RoleValidator::new(EventType::SessionEvent)
                .rule(RoleRule::required(R::Actor, C::Person))
                .rule(RoleRule::required(R::Object, C::SoftwareApplication))
                .rule(RoleRule::optional(R::Target, C::Session)),
        ),
        ActionDefinition::new(
            TIMED_OUT,
            RoleValidator::new(EventType::SessionEvent)
                .rule(RoleRule::required(R::Actor, C::SoftwareApplication))
                .rule(RoleRule::required(R::Object, C::Session)),
        ),
    ]
}

/// A session profile localized with `localizer`.
pub fn profile(localizer: Arc<dyn Localizer>) -> Profile {
    Profile::new(NAME, actions(), localizer)
}

/// The shared session profile, localized with the built-in bundle.
pub fn default_profile() -> &'static Profile {
    static PROFILE: OnceLock<Profile> = OnceLock::new();
    PROFILE.get_or_init(|| profile(Arc::new(Bundle::default_actions())))
}

/// Validates an event against the shared session profile.
pub fn validate_event(event: &Event) -> ValidatorResult {
    default_profile().validate_event(event)
}
