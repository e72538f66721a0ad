use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of conformance violation kinds.
///
/// Each kind has a stable identifier and a message template. Templates use
/// the named placeholders `{field}`, `{expected}` and `{actual}`, filled in
/// by [`Violation::message`](crate::Violation::message).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conformance {
    /// A required field is absent, empty, or not a valid identifier.
    InvalidArgument,
    /// A declared type tag does not match the kind being built.
    TypeMismatch,
    /// A value lies outside its fixed set of allowed values.
    InvalidEnumValue,
    /// The event's action has no match in the profile.
    ActionUnrecognized,
    /// A participant the action requires is absent.
    MissingParticipant,
    /// A participant is present but of the wrong category for its role.
    ParticipantTypeMismatch,
}

impl Conformance {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Conformance; 6] = [
        Self::InvalidArgument,
        Self::TypeMismatch,
        Self::InvalidEnumValue,
        Self::ActionUnrecognized,
        Self::MissingParticipant,
        Self::ParticipantTypeMismatch,
    ];

    /// Stable identifier of this violation kind.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid-argument",
            Self::TypeMismatch => "type-mismatch",
            Self::InvalidEnumValue => "invalid-enum-value",
            Self::ActionUnrecognized => "action-unrecognized",
            Self::MissingParticipant => "missing-participant",
            Self::ParticipantTypeMismatch => "participant-type-mismatch",
        }
    }

    /// Message template with `{field}`, `{expected}` and `{actual}` placeholders.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "{field} must be a non-empty, valid value (got {actual})",
            Self::TypeMismatch => "{field} expected type {expected} but found {actual}",
            Self::InvalidEnumValue => "{field} must be one of {expected} (got {actual})",
            Self::ActionUnrecognized => "action {actual} is not recognized by this profile",
            Self::MissingParticipant => "required participant {field} is missing",
            Self::ParticipantTypeMismatch => "participant {field} must be a {expected} but is {actual}",
        }
    }

    /// Looks up a kind by its stable identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
