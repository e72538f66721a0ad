//! Event type tags.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of event a profile can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    SessionEvent,
    NavigationEvent,
    ViewEvent,
}

impl EventType {
    pub const ALL: [EventType; 3] = [Self::SessionEvent, Self::NavigationEvent, Self::ViewEvent];

    /// Returns the canonical type URI for this event kind.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::SessionEvent => "http://purl.imsglobal.org/caliper/v1/SessionEvent",
            Self::NavigationEvent => "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
            Self::ViewEvent => "http://purl.imsglobal.org/caliper/v1/ViewEvent",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.uri() == s)
            .ok_or_else(|| Error::UnknownEventType(s.to_string()))
    }
}
