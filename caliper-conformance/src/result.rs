use crate::{Conformance, Violation};
use serde::{Deserialize, Serialize};

/// The report produced by one validation pass.
///
/// Violations keep the order in which validators found them. A result is
/// assembled once, from the violations a pass collected, and exposes no
/// mutation afterwards; an empty result means the event conforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorResult {
    violations: Vec<Violation>,
}

impl ValidatorResult {
    /// A conformant result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result holding exactly one violation.
    #[must_use]
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// True iff no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Kinds of the recorded violations, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<Conformance> {
        self.violations.iter().map(Violation::kind).collect()
    }

    /// Returns true if any violation is of the given kind.
    #[must_use]
    pub fn contains(&self, kind: Conformance) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }

    /// Rendered messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for ValidatorResult {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl FromIterator<Violation> for ValidatorResult {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidatorResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
