mod common;

use caliper_conformance::{Conformance, ValidatorResult, Violation};
use caliper_model::{Event, Participant};
use caliper_profiles::profiles::{reading, session};
use caliper_profiles::{
    ActionDefinition, ActionRegistry, Bundle, LocalizeError, Profile, ProfileError, RoleRule,
    RoleValidator, StructuralValidator, UnrecognizedValidator, UNRECOGNIZED,
};
use caliper_types::{EntityCategory, EventType, ParticipantRole};
use common::CountingLocalizer;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn accept_all(_: &Event) -> ValidatorResult {
    ValidatorResult::empty()
}

// ── Reverse lookup ──

#[test]
fn lookup_round_trips_every_key() {
    let bundle = Bundle::default_actions();
    for definitions in [session::actions(), reading::actions()] {
        let registry = ActionRegistry::build("test", &definitions, &bundle).unwrap();
        assert_eq!(registry.len(), definitions.len());
        for key in registry.keys() {
            let display = registry.display_string(key).unwrap();
            assert_eq!(registry.lookup_key(display), key);
        }
    }
}

#[test]
fn unknown_display_string_maps_to_sentinel() {
    let registry =
        ActionRegistry::build("session", &session::actions(), &Bundle::default_actions()).unwrap();
    assert_eq!(registry.lookup_key("bogus.action"), UNRECOGNIZED);
    assert_eq!(registry.lookup_key(""), UNRECOGNIZED);
    // Lookup is exact: no trimming, no case folding.
    let display = common::display(session::LOGGED_IN);
    assert_eq!(registry.lookup_key(&format!(" {display}")), UNRECOGNIZED);
    assert_eq!(registry.lookup_key(&display.to_uppercase()), UNRECOGNIZED);
}

#[test]
fn sentinel_is_always_present() {
    let event = Event::builder(EventType::SessionEvent, "anything").build();
    for registry in [
        ActionRegistry::build("session", &session::actions(), &Bundle::default_actions()).unwrap(),
        ActionRegistry::build("empty", &[], &Bundle::new()).unwrap(),
    ] {
        assert!(registry.contains_key(UNRECOGNIZED));
        assert_eq!(
            registry.validator(UNRECOGNIZED).validate(&event).violations(),
            &[Violation::action_unrecognized("anything")]
        );
        // Present, but never reachable through a display string.
        assert_eq!(registry.display_string(UNRECOGNIZED), None);
        assert!(registry.keys().all(|k| k != UNRECOGNIZED));
    }
}

#[test]
fn unregistered_key_falls_back_to_sentinel_validator() {
    let registry =
        ActionRegistry::build("session", &session::actions(), &Bundle::default_actions()).unwrap();
    let event = Event::builder(EventType::SessionEvent, "quiz.started").build();
    assert!(!registry.contains_key("quiz.started"));
    assert_eq!(
        registry.validator("quiz.started").validate(&event).kinds(),
        vec![Conformance::ActionUnrecognized]
    );
}

#[test]
fn localized_bundle_changes_display_strings() {
    let bundle = Bundle::default_actions().with_entry(session::LOGGED_IN, "Connecté");
    let registry = ActionRegistry::build("session", &session::actions(), &bundle).unwrap();
    assert_eq!(registry.lookup_key("Connecté"), session::LOGGED_IN);
    assert_eq!(
        registry.lookup_key(&common::display(session::LOGGED_IN)),
        UNRECOGNIZED
    );
}

#[test]
fn empty_registry_recognizes_nothing() {
    let registry = ActionRegistry::build("empty", &[], &Bundle::new()).unwrap();
    assert!(registry.is_empty());

    let event = Event::builder(EventType::SessionEvent, "anything").build();
    assert_eq!(
        registry.dispatch(&event).violations(),
        &[Violation::action_unrecognized("anything")]
    );
}

// ── Build errors ──

#[test]
fn duplicate_display_string_fails_build() {
    let bundle = Bundle::new().with_entry("a", "Same").with_entry("b", "Same");
    let definitions = vec![
        ActionDefinition::new("a", accept_all),
        ActionDefinition::new("b", accept_all),
    ];

    let err = ActionRegistry::build("test", &definitions, &bundle).unwrap_err();
    assert_eq!(
        err,
        ProfileError::DuplicateDisplayString {
            display: "Same".into(),
            first: "a".into(),
            second: "b".into(),
        }
    );
}

#[test]
fn duplicate_key_fails_build() {
    let definitions = vec![
        ActionDefinition::new(session::LOGGED_IN, accept_all),
        ActionDefinition::new(session::LOGGED_IN, accept_all),
    ];

    let err = ActionRegistry::build("test", &definitions, &Bundle::default_actions()).unwrap_err();
    assert_eq!(err, ProfileError::DuplicateActionKey(session::LOGGED_IN.into()));
}

#[test]
fn reserved_key_fails_build() {
    let bundle = Bundle::new().with_entry(UNRECOGNIZED, "Unrecognized");
    let definitions = vec![ActionDefinition::new(UNRECOGNIZED, UnrecognizedValidator)];

    let err = ActionRegistry::build("test", &definitions, &bundle).unwrap_err();
    assert_eq!(err, ProfileError::ReservedActionKey(UNRECOGNIZED.into()));
}

#[test]
fn missing_localization_fails_build() {
    let err = ActionRegistry::build("session", &session::actions(), &Bundle::new()).unwrap_err();
    assert!(matches!(
        err,
        ProfileError::Localization {
            source: LocalizeError::MissingKey(_),
            ..
        }
    ));
}

#[test]
fn empty_localization_fails_build() {
    let bundle = Bundle::default_actions().with_entry(session::TIMED_OUT, "");
    let err = ActionRegistry::build("session", &session::actions(), &bundle).unwrap_err();
    assert_eq!(
        err,
        ProfileError::Localization {
            key: session::TIMED_OUT.into(),
            source: LocalizeError::EmptyValue(session::TIMED_OUT.into()),
        }
    );
}

// ── Profile initialization ──

#[test]
fn failed_profile_recognizes_nothing() {
    let profile = session::profile(Arc::new(Bundle::new()));
    assert!(profile.initialize().is_err());

    let event = Event::builder(EventType::SessionEvent, common::display(session::LOGGED_IN))
        .actor(common::person())
        .object(common::app())
        .build();
    let result = profile.validate_event(&event);
    assert_eq!(result.kinds(), vec![Conformance::ActionUnrecognized]);
}

#[test]
fn failed_build_is_reported_consistently() {
    let profile = session::profile(Arc::new(Bundle::new()));
    let first = profile.initialize().unwrap_err();
    let second = profile.registry().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn registry_resolves_each_key_once() {
    let localizer = Arc::new(CountingLocalizer::default());
    let profile = session::profile(localizer.clone());
    assert_eq!(localizer.calls(), 0);

    let event = Event::builder(EventType::SessionEvent, common::display(session::LOGGED_IN))
        .actor(common::person())
        .object(common::app())
        .build();
    for _ in 0..10 {
        assert!(profile.validate_event(&event).is_empty());
    }
    assert_eq!(localizer.calls(), session::actions().len());
}

#[test]
fn concurrent_first_use_builds_once() {
    let localizer = Arc::new(CountingLocalizer::default());
    let profile = reading::profile(localizer.clone());
    let event = Event::builder(EventType::ViewEvent, common::display(reading::VIEWED))
        .actor(common::person())
        .object(common::epub())
        .build();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| s.spawn(|| profile.validate_event(&event)))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_empty());
        }
    });

    assert_eq!(localizer.calls(), reading::actions().len());
    assert_eq!(profile.registry().unwrap().len(), 2);
}

#[test]
fn custom_profile_with_closure_validator() {
    let bundle = Bundle::new().with_entry("quiz.started", "Started");
    let profile = Profile::new(
        "quiz",
        vec![ActionDefinition::new("quiz.started", |event: &Event| {
            if event.actor().is_some() {
                ValidatorResult::empty()
            } else {
                ValidatorResult::single(Violation::missing_participant("actor"))
            }
        })],
        Arc::new(bundle),
    );

    let event = Event::builder(EventType::ViewEvent, "Started").build();
    assert_eq!(
        profile.validate_event(&event).violations(),
        &[Violation::missing_participant("actor")]
    );

    let event = Event::builder(EventType::ViewEvent, "Started")
        .actor(common::person())
        .build();
    assert!(profile.validate_event(&event).is_empty());
}

#[test]
fn custom_profile_accepts_any_object_kind() {
    let bundle = Bundle::new().with_entry("annotation.bookmarked", "Bookmarked");
    let validator = RoleValidator::new(EventType::ViewEvent)
        .rule(RoleRule::required(ParticipantRole::Actor, EntityCategory::Person))
        .rule(RoleRule::required_any(ParticipantRole::Object));
    let profile = Profile::new(
        "annotation",
        vec![ActionDefinition::new("annotation.bookmarked", validator)],
        Arc::new(bundle),
    );

    let objects: [Participant; 4] = [
        common::epub().into(),
        common::frame().into(),
        common::app().into(),
        common::session().into(),
    ];
    for object in objects {
        let event = Event::builder(EventType::ViewEvent, "Bookmarked")
            .actor(common::person())
            .object(object)
            .build();
        assert!(profile.validate_event(&event).is_empty());
    }

    let event = Event::builder(EventType::ViewEvent, "Bookmarked")
        .actor(common::person())
        .build();
    assert_eq!(
        profile.validate_event(&event).violations(),
        &[Violation::missing_participant("object")]
    );
}

#[test]
fn shared_profiles_are_singletons() {
    assert!(std::ptr::eq(session::default_profile(), session::default_profile()));
    assert_eq!(session::default_profile().name(), session::NAME);
    assert_eq!(reading::default_profile().name(), reading::NAME);
    assert!(session::default_profile().initialize().is_ok());
}
