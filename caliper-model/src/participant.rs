use crate::{
    DigitalResource, Entity, Frame, Membership, Organization, Person, Session, SoftwareApplication,
    WebPage,
};
use caliper_types::{EntityCategory, EntityType};
use serde::Serialize;

/// Any built entity that can fill a role on an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Participant {
    Person(Person),
    Organization(Organization),
    SoftwareApplication(SoftwareApplication),
    Session(Session),
    Membership(Membership),
    DigitalResource(DigitalResource),
    WebPage(WebPage),
    Frame(Frame),
}

impl Participant {
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Person(_) => Person::KIND,
            Self::Organization(_) => Organization::KIND,
            Self::SoftwareApplication(_) => SoftwareApplication::KIND,
            Self::Session(_) => Session::KIND,
            Self::Membership(_) => Membership::KIND,
            Self::DigitalResource(_) => DigitalResource::KIND,
            Self::WebPage(_) => WebPage::KIND,
            Self::Frame(_) => Frame::KIND,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Person(e) => e.id(),
            Self::Organization(e) => e.id(),
            Self::SoftwareApplication(e) => e.id(),
            Self::Session(e) => e.id(),
            Self::Membership(e) => e.id(),
            Self::DigitalResource(e) => e.id(),
            Self::WebPage(e) => e.id(),
            Self::Frame(e) => e.id(),
        }
    }

    /// The participant's type tag.
    #[must_use]
    pub fn type_uri(&self) -> &str {
        match self {
            Self::Person(e) => e.type_uri(),
            Self::Organization(e) => e.type_uri(),
            Self::SoftwareApplication(e) => e.type_uri(),
            Self::Session(e) => e.type_uri(),
            Self::Membership(e) => e.type_uri(),
            Self::DigitalResource(e) => e.type_uri(),
            Self::WebPage(e) => e.type_uri(),
            Self::Frame(e) => e.type_uri(),
        }
    }

    /// True if the participant's type tag names a kind in `category`.
    #[must_use]
    pub fn is_a(&self, category: EntityCategory) -> bool {
        category.contains_uri(self.type_uri())
    }
}

impl From<Person> for Participant {
    fn from(e: Person) -> Self {
        Self::Person(e)
    }
}

impl From<Organization> for Participant {
    fn from(e: Organization) -> Self {
        Self::Organization(e)
    }
}

impl From<SoftwareApplication> for Participant {
    fn from(e: SoftwareApplication) -> Self {
        Self::SoftwareApplication(e)
    }
}

impl From<Session> for Participant {
    fn from(e: Session) -> Self {
        Self::Session(e)
    }
}

impl From<Membership> for Participant {
    fn from(e: Membership) -> Self {
        Self::Membership(e)
    }
}

impl From<DigitalResource> for Participant {
    fn from(e: DigitalResource) -> Self {
        Self::DigitalResource(e)
    }
}

impl From<WebPage> for Participant {
    fn from(e: WebPage) -> Self {
        Self::WebPage(e)
    }
}

impl From<Frame> for Participant {
    fn from(e: Frame) -> Self {
        Self::Frame(e)
    }
}
