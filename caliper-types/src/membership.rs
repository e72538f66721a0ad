//! Membership status and role vocabularies.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The current status of a membership, applying to all of its roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
    Deleted,
}

impl Status {
    /// Every supported status, in declaration order.
    pub const ALL: [Status; 3] = [Self::Active, Self::Inactive, Self::Deleted];

    /// Names accepted by `FromStr`, matching `ALL`.
    pub const NAMES: [&'static str; 3] = ["Active", "Inactive", "Deleted"];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// A role an agent plays within a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Learner,
    Instructor,
    Administrator,
    TeachingAssistant,
    Mentor,
    Member,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Self::Learner,
        Self::Instructor,
        Self::Administrator,
        Self::TeachingAssistant,
        Self::Mentor,
        Self::Member,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Learner => "Learner",
            Self::Instructor => "Instructor",
            Self::Administrator => "Administrator",
            Self::TeachingAssistant => "TeachingAssistant",
            Self::Mentor => "Mentor",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}
