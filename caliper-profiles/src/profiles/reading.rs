//! Reading profile: navigating to and viewing digital resources.

use crate::localize::{Bundle, Localizer};
use crate::profile::Profile;
use crate::registry::ActionDefinition;
use crate::validator::{RoleRule, RoleValidator};
use caliper_conformance::ValidatorResult;
use caliper_model::Event;
use caliper_types::{EntityCategory, EventType, ParticipantRole};
use std::sync::{Arc, OnceLock};

pub const NAME: &str = "reading";

pub const NAVIGATED_TO: &str = "reading.navigatedTo";
pub const VIEWED: &str = "reading.viewed";

#[must_use]
pub fn actions() -> Vec<ActionDefinition> {
    use EntityCategory as C;
    use ParticipantRole as R;

    vec![
        ActionDefinition::new(
            NAVIGATED_TO,
            RoleValidator::new(EventType::NavigationEvent)
                .rule(RoleRule::required(R::Actor, C::Person))
                .rule(RoleRule::required(R::Object, C::DigitalResource))
                .rule(RoleRule::optional(R::Target, C::Frame)),
        ),
        ActionDefinition::new(
            VIEWED,
            RoleValidator::new(EventType::ViewEvent)
                .rule(RoleRule::required(R::Actor, C::Person))
                .rule(RoleRule::required(R::Object, C::DigitalResource))
                .rule(RoleRule::optional(R::Target, C::Frame)),
        ),
    ]
}

pub fn profile(localizer: Arc<dyn Localizer>) -> Profile {
    Profile::new(NAME, actions(), localizer)
}

pub fn default_profile() -> &'static Profile {
    static PROFILE: OnceLock<Profile> = OnceLock::new();
    PROFILE.get_or_init(|| profile(Arc::new(Bundle::default_actions())))
}

pub fn validate_event(event: &Event) -> ValidatorResult {
    default_profile().validate_event(event)
}
