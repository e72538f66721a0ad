//! Entity type tags.
//!
//! Every entity kind has exactly one canonical type URI. Builders stage the
//! URI of the kind they produce and `check_type_uri` compares against it.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of entity the core knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Person,
    Organization,
    SoftwareApplication,
    Session,
    Membership,
    DigitalResource,
    WebPage,
    Frame,
}

impl EntityType {
    /// Every entity type, in declaration order.
    pub const ALL: [EntityType; 8] = [
        Self::Person,
        Self::Organization,
        Self::SoftwareApplication,
        Self::Session,
        Self::Membership,
        Self::DigitalResource,
        Self::WebPage,
        Self::Frame,
    ];

    /// Returns the canonical type URI for this kind.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Person => "http://purl.imsglobal.org/caliper/v1/lis/Person",
            Self::Organization => "http://purl.imsglobal.org/caliper/v1/w3c/Organization",
            Self::SoftwareApplication => "http://purl.imsglobal.org/caliper/v1/SoftwareApplication",
            Self::Session => "http://purl.imsglobal.org/caliper/v1/Session",
            Self::Membership => "http://purl.imsglobal.org/caliper/v1/lis/Membership",
            Self::DigitalResource => "http://purl.imsglobal.org/caliper/v1/DigitalResource",
            Self::WebPage => "http://purl.imsglobal.org/caliper/v1/WebPage",
            Self::Frame => "http://purl.imsglobal.org/caliper/v1/Frame",
        }
    }

    /// Returns the short name of this kind (the last segment of its URI).
    #[must_use]
    pub fn name(&self) -> &'static str {
        let uri = self.uri();
        uri.rsplit('/').next().unwrap_or(uri)
    }

    /// Looks up an entity type by its canonical URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.uri() == uri)
    }

    /// Returns true if this kind belongs to the given category.
    #[must_use]
    pub fn is_a(&self, category: EntityCategory) -> bool {
        category.members().contains(self)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uri(s)
            .or_else(|| Self::ALL.into_iter().find(|t| t.name() == s))
            .ok_or_else(|| Error::UnknownEntityType(s.to_string()))
    }
}

/// A named set of entity kinds accepted in a participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityCategory {
    /// Anything that can act: people, organizations and software.
    Agent,
    Person,
    SoftwareApplication,
    Session,
    /// Any readable resource, including pages and frames within one.
    DigitalResource,
    Frame,
}

impl EntityCategory {
    /// Returns the entity kinds in this category.
    #[must_use]
    pub fn members(&self) -> &'static [EntityType] {
        match self {
            Self::Agent => &[
                EntityType::Person,
                EntityType::Organization,
                EntityType::SoftwareApplication,
            ],
            Self::Person => &[EntityType::Person],
            Self::SoftwareApplication => &[EntityType::SoftwareApplication],
            Self::Session => &[EntityType::Session],
            Self::DigitalResource => &[
                EntityType::DigitalResource,
                EntityType::WebPage,
                EntityType::Frame,
            ],
            Self::Frame => &[EntityType::Frame],
        }
    }

    /// Returns true if a type URI names a kind in this category.
    #[must_use]
    pub fn contains_uri(&self, uri: &str) -> bool {
        EntityType::from_uri(uri).is_some_and(|t| t.is_a(*self))
    }

    /// Human-readable category name used in violation messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Person => "Person",
            Self::SoftwareApplication => "SoftwareApplication",
            Self::Session => "Session",
            Self::DigitalResource => "DigitalResource",
            Self::Frame => "Frame",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris_are_unique() {
        for a in EntityType::ALL {
            for b in EntityType::ALL {
                if a != b {
                    assert_ne!(a.uri(), b.uri());
                }
            }
        }
    }

    #[test]
    fn name_is_last_uri_segment() {
        assert_eq!(EntityType::Person.name(), "Person");
        assert_eq!(EntityType::Organization.name(), "Organization");
        assert_eq!(EntityType::WebPage.name(), "WebPage");
    }

    #[test]
    fn frame_is_a_digital_resource() {
        assert!(EntityType::Frame.is_a(EntityCategory::DigitalResource));
        assert!(EntityType::Frame.is_a(EntityCategory::Frame));
        assert!(!EntityType::DigitalResource.is_a(EntityCategory::Frame));
    }
}
