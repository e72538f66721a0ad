//! Error type for entity construction.

use crate::{Conformance, Violation};
use thiserror::Error;

/// Result type for entity builders.
pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// A `build()` call was aborted by the first failing field validator.
///
/// Construction is fail-fast: the error carries exactly one violation and no
/// entity is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity construction failed: {violation}")]
pub struct ConstructionError {
    violation: Violation,
}

impl ConstructionError {
    /// The catalog entry that aborted construction.
    #[must_use]
    pub fn kind(&self) -> Conformance {
        self.violation.kind()
    }

    #[must_use]
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    pub fn into_violation(self) -> Violation {
        self.violation
    }
}

impl From<Violation> for ConstructionError {
    fn from(violation: Violation) -> Self {
        Self { violation }
    }
}
