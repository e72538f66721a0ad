//! Structural validators: what an action requires of an event's participants.

use caliper_conformance::{ValidatorResult, Violation};
use caliper_model::Event;
use caliper_types::{EntityCategory, EventType, ParticipantRole};

/// Checks one event against the structure its action requires.
///
/// Implementations must be pure: the same event always yields the same result.
pub trait StructuralValidator: Send + Sync {
    fn validate(&self, event: &Event) -> ValidatorResult;
}

impl<F> StructuralValidator for F
where
    F: Fn(&Event) -> ValidatorResult + Send + Sync,
{
    fn validate(&self, event: &Event) -> ValidatorResult {
        self(event)
    }
}

/// What one participant role must hold for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRule {
    pub role: ParticipantRole,
    pub required: bool,
    /// Category the participant must belong to, if constrained.
    pub category: Option<EntityCategory>,
}

impl RoleRule {
    #[must_use]
    pub const fn required(role: ParticipantRole, category: EntityCategory) -> Self {
        Self {
            role,
            required: true,
            category: Some(category),
        }
    }

    #[must_use]
    pub const fn optional(role: ParticipantRole, category: EntityCategory) -> Self {
        Self {
            role,
            required: false,
            category: Some(category),
        }
    }

    /// Required, but any entity kind is accepted.
    #[must_use]
    pub const fn required_any(role: ParticipantRole) -> Self {
        Self {
            role,
            required: true,
            category: None,
        }
    }

    fn check(&self, event: &Event, violations: &mut Vec<Violation>) {
        let Some(participant) = event.participant(self.role) else {
            if self.required {
                violations.push(Violation::missing_participant(self.role.as_str()));
            }
            return;
        };
        if let Some(category) = self.category {
            if !participant.is_a(category) {
                violations.push(Violation::participant_type_mismatch(
                    self.role.as_str(),
                    category.label(),
                    participant.type_uri(),
                ));
            }
        }
    }
}

/// Role-driven validator: an expected event type plus one rule per role.
///
/// Every rule is checked and every failure recorded. A missing participant
/// skips only the category check for that role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleValidator {
    event_type: EventType,
    rules: Vec<RoleRule>,
}

impl RoleValidator {
    #[must_use]
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: RoleRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    #[must_use]
    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }
}

impl StructuralValidator for RoleValidator {
    fn validate(&self, event: &Event) -> ValidatorResult {
        let mut violations = Vec::new();
        if event.event_type() != self.event_type {
            violations.push(Violation::type_mismatch(
                "type",
                self.event_type.uri(),
                event.event_type().uri(),
            ));
        }
        for rule in &self.rules {
            rule.check(event, &mut violations);
        }
        ValidatorResult::from(violations)
    }
}

/// Validator bound to the sentinel action: always exactly one
/// `ActionUnrecognized`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnrecognizedValidator;

impl StructuralValidator for UnrecognizedValidator {
    fn validate(&self, event: &Event) -> ValidatorResult {
        ValidatorResult::single(Violation::action_unrecognized(event.action()))
    }
}
