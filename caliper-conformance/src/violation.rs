use crate::Conformance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for a context value that was never supplied.
const ABSENT: &str = "none";

/// One occurrence of a catalog entry, carrying the values its template names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    kind: Conformance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
}

impl Violation {
    /// Creates a violation of the given kind with no context.
    #[must_use]
    pub fn new(kind: Conformance) -> Self {
        Self {
            kind,
            field: None,
            expected: None,
            actual: None,
        }
    }

    /// A required field was absent, empty or malformed.
    #[must_use]
    pub fn invalid_argument(field: impl Into<String>, actual: Option<&str>) -> Self {
        let violation = Self::new(Conformance::InvalidArgument).with_field(field);
        match actual {
            Some(actual) => violation.with_actual(format!("\"{actual}\"")),
            None => violation,
        }
    }

    /// A declared type tag differs from the expected one.
    #[must_use]
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(Conformance::TypeMismatch)
            .with_field(field)
            .with_expected(expected)
            .with_actual(actual)
    }

    /// A value is outside its allowed set.
    #[must_use]
    pub fn invalid_enum_value(field: impl Into<String>, allowed: &[&str], actual: &str) -> Self {
        Self::new(Conformance::InvalidEnumValue)
            .with_field(field)
            .with_expected(format!("{{{}}}", allowed.join(", ")))
            .with_actual(format!("\"{actual}\""))
    }

    /// The raw action string matched nothing in the profile.
    #[must_use]
    pub fn action_unrecognized(action: &str) -> Self {
        Self::new(Conformance::ActionUnrecognized)
            .with_field("action")
            .with_actual(format!("\"{action}\""))
    }

    /// A required participant role is empty.
    #[must_use]
    pub fn missing_participant(role: impl Into<String>) -> Self {
        Self::new(Conformance::MissingParticipant).with_field(role)
    }

    /// A participant's type is outside the category its role accepts.
    #[must_use]
    pub fn participant_type_mismatch(
        role: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(Conformance::ParticipantTypeMismatch)
            .with_field(role)
            .with_expected(expected)
            .with_actual(actual)
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// The catalog entry this violation instantiates.
    #[must_use]
    pub fn kind(&self) -> Conformance {
        self.kind
    }

    /// Name of the offending field or participant role, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Renders the kind's template with this occurrence's context.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind
            .template()
            .replace("{field}", self.field().unwrap_or(ABSENT))
            .replace("{expected}", self.expected().unwrap_or(ABSENT))
            .replace("{actual}", self.actual().unwrap_or(ABSENT))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.id(), self.message())
    }
}
