//! Entity model for Caliper.
//!
//! Defines the validated records that events are assembled from:
//! - [`Entity`]: the read-only view every entity kind shares (id, type tag, timestamps)
//! - [`EntityBuilder`]: staging setters plus the single validating `build()`
//! - concrete kinds: [`Person`], [`Organization`], [`SoftwareApplication`],
//!   [`Session`], [`Membership`], [`DigitalResource`], [`WebPage`], [`Frame`]
//! - [`Participant`]: any entity that can fill an event role
//! - [`Event`]: an action plus its participants, assembled by [`EventBuilder`]
//!
//! An entity value can only be obtained from a successful `build()`, so every
//! entity held anywhere in the system has already passed its field checks.

mod agent;
mod entity;
mod event;
mod membership;
mod participant;
mod resource;
mod session;

pub use agent::{
    Organization, OrganizationBuilder, Person, PersonBuilder, SoftwareApplication,
    SoftwareApplicationBuilder,
};
pub use entity::{BaseFields, Entity, EntityBase, EntityBuilder};
pub use event::{Event, EventBuilder};
pub use membership::{Membership, MembershipBuilder};
pub use participant::Participant;
pub use resource::{DigitalResource, DigitalResourceBuilder, Frame, FrameBuilder, WebPage, WebPageBuilder};
pub use session::{Session, SessionBuilder};

pub use caliper_conformance::{ConstructionError, ConstructionResult};

/// Glob-importable builder trait and entity view.
pub mod prelude {
    pub use crate::{Entity, EntityBuilder};
}
