use serde::{Deserialize, Serialize};
use std::fmt;

/// The slot a participant entity occupies on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Actor,
    Object,
    Target,
    Generated,
}

impl ParticipantRole {
    pub const ALL: [ParticipantRole; 4] = [Self::Actor, Self::Object, Self::Target, Self::Generated];

    /// Field name of this role on an event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Object => "object",
            Self::Target => "target",
            Self::Generated => "generated",
        }
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
