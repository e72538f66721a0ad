use caliper_types::{EntityCategory, EntityType, EventType, ParticipantRole, Role, Status};
use proptest::prelude::*;
use std::str::FromStr;

// ── EntityType ────────────────────────────────────────────────────

#[test]
fn entity_type_uri_roundtrip() {
    for t in EntityType::ALL {
        assert_eq!(EntityType::from_uri(t.uri()), Some(t));
        assert_eq!(EntityType::from_str(t.uri()).unwrap(), t);
    }
}

#[test]
fn entity_type_parses_short_name() {
    assert_eq!(EntityType::from_str("Membership").unwrap(), EntityType::Membership);
    assert_eq!(EntityType::from_str("SoftwareApplication").unwrap(), EntityType::SoftwareApplication);
}

#[test]
fn entity_type_rejects_unknown() {
    let err = EntityType::from_str("http://example.com/Widget").unwrap_err();
    assert!(format!("{err}").contains("unknown entity type"));
}

#[test]
fn entity_type_display_is_uri() {
    assert_eq!(
        EntityType::Session.to_string(),
        "http://purl.imsglobal.org/caliper/v1/Session"
    );
}

#[test]
fn entity_type_serde_roundtrip() {
    let json = serde_json::to_string(&EntityType::WebPage).unwrap();
    let parsed: EntityType = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, EntityType::WebPage);
}

// ── EntityCategory ────────────────────────────────────────────────

#[test]
fn agent_category_members() {
    assert!(EntityType::Person.is_a(EntityCategory::Agent));
    assert!(EntityType::Organization.is_a(EntityCategory::Agent));
    assert!(EntityType::SoftwareApplication.is_a(EntityCategory::Agent));
    assert!(!EntityType::Session.is_a(EntityCategory::Agent));
}

#[test]
fn category_contains_uri() {
    assert!(EntityCategory::DigitalResource.contains_uri(EntityType::WebPage.uri()));
    assert!(!EntityCategory::Person.contains_uri(EntityType::SoftwareApplication.uri()));
    assert!(!EntityCategory::Agent.contains_uri("not-a-type"));
}

#[test]
fn every_entity_type_has_a_category() {
    let categories = [
        EntityCategory::Agent,
        EntityCategory::Person,
        EntityCategory::SoftwareApplication,
        EntityCategory::Session,
        EntityCategory::DigitalResource,
        EntityCategory::Frame,
    ];
    for t in EntityType::ALL {
        if t == EntityType::Membership {
            continue;
        }
        assert!(categories.iter().any(|c| t.is_a(*c)), "{t} has no category");
    }
}

// ── EventType ─────────────────────────────────────────────────────

#[test]
fn event_type_uri_roundtrip() {
    for t in EventType::ALL {
        assert_eq!(EventType::from_str(t.uri()).unwrap(), t);
    }
}

#[test]
fn event_type_rejects_unknown() {
    assert!(EventType::from_str("SessionEvent").is_err());
}

// ── Status / Role ─────────────────────────────────────────────────

#[test]
fn status_names_match_all() {
    let names: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
    assert_eq!(names, Status::NAMES.to_vec());
}

#[test]
fn status_parse_is_case_sensitive() {
    assert_eq!(Status::from_str("Active").unwrap(), Status::Active);
    assert!(Status::from_str("active").is_err());
    assert!(Status::from_str("Suspended").is_err());
}

#[test]
fn role_roundtrip() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
    assert!(Role::from_str("Owner").is_err());
}

#[test]
fn participant_role_names() {
    let names: Vec<String> = ParticipantRole::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["actor", "object", "target", "generated"]);
}

proptest! {
    #[test]
    fn status_parse_accepts_only_known_names(s in "[A-Za-z]{0,12}") {
        let parsed = Status::from_str(&s);
        prop_assert_eq!(parsed.is_ok(), Status::NAMES.contains(&s.as_str()));
    }
}
