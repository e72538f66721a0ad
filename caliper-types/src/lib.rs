//! Core vocabulary for Caliper.
//!
//! This crate defines the closed, plugin-free vocabulary every other Caliper
//! crate agrees on:
//! - Entity type tags and the categories a participant can belong to
//! - Event type tags
//! - Membership statuses and roles
//! - The participant roles an event can carry
//!
//! Entities themselves (and their builders) live in `caliper-model`.

mod entity_type;
mod event_type;
mod membership;
mod role;

pub use entity_type::{EntityCategory, EntityType};
pub use event_type::EventType;
pub use membership::{Role, Status};
pub use role::ParticipantRole;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing vocabulary terms.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    #[error("unknown membership status: {0}")]
    UnknownStatus(String),

    #[error("unknown membership role: {0}")]
    UnknownRole(String),
}
