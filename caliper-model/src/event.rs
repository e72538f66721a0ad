//! Events: a learner action and the entities taking part in it.
//!
//! Events are input to profile validation, not validated here. The builder
//! assembles whatever it is given; whether the participants fit the action
//! is decided by the profile the event is checked against.

use crate::{Membership, Organization, Participant, Session, SoftwareApplication};
use caliper_types::{EventType, ParticipantRole};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A learner action with its participants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@type")]
    event_type: EventType,
    action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    actor: Option<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    object: Option<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated: Option<Participant>,
    event_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ed_app: Option<SoftwareApplication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    membership: Option<Membership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    federated_session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    navigated_from: Option<Participant>,
}

impl Event {
    /// Starts an event of the given type with a fresh `urn:uuid` id.
    #[must_use]
    pub fn builder(event_type: EventType, action: impl Into<String>) -> EventBuilder {
        EventBuilder {
            event: Event {
                id: format!("urn:uuid:{}", Uuid::new_v4()),
                event_type,
                action: action.into(),
                actor: None,
                object: None,
                target: None,
                generated: None,
                event_time: Utc::now(),
                ed_app: None,
                group: None,
                membership: None,
                federated_session: None,
                navigated_from: None,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// The raw, display-form action string.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn actor(&self) -> Option<&Participant> {
        self.actor.as_ref()
    }

    #[must_use]
    pub fn object(&self) -> Option<&Participant> {
        self.object.as_ref()
    }

    #[must_use]
    pub fn target(&self) -> Option<&Participant> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn generated(&self) -> Option<&Participant> {
        self.generated.as_ref()
    }

    /// The participant filling `role`, if any.
    #[must_use]
    pub fn participant(&self, role: ParticipantRole) -> Option<&Participant> {
        match role {
            ParticipantRole::Actor => self.actor(),
            ParticipantRole::Object => self.object(),
            ParticipantRole::Target => self.target(),
            ParticipantRole::Generated => self.generated(),
        }
    }

    #[must_use]
    pub fn event_time(&self) -> DateTime<Utc> {
        self.event_time
    }

    /// The application the event was captured in.
    #[must_use]
    pub fn ed_app(&self) -> Option<&SoftwareApplication> {
        self.ed_app.as_ref()
    }

    /// The course section or group the event happened in.
    #[must_use]
    pub fn group(&self) -> Option<&Organization> {
        self.group.as_ref()
    }

    #[must_use]
    pub fn membership(&self) -> Option<&Membership> {
        self.membership.as_ref()
    }

    #[must_use]
    pub fn federated_session(&self) -> Option<&Session> {
        self.federated_session.as_ref()
    }

    /// Where the actor navigated from, for navigation events.
    #[must_use]
    pub fn navigated_from(&self) -> Option<&Participant> {
        self.navigated_from.as_ref()
    }
}

/// Assembles an [`Event`]. Never fails.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Overrides the generated id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.event.id = id.into();
        self
    }

    #[must_use]
    pub fn actor(mut self, actor: impl Into<Participant>) -> Self {
        self.event.actor = Some(actor.into());
        self
    }

    #[must_use]
    pub fn object(mut self, object: impl Into<Participant>) -> Self {
        self.event.object = Some(object.into());
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<Participant>) -> Self {
        self.event.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn generated(mut self, generated: impl Into<Participant>) -> Self {
        self.event.generated = Some(generated.into());
        self
    }

    #[must_use]
    pub fn event_time(mut self, at: DateTime<Utc>) -> Self {
        self.event.event_time = at;
        self
    }

    #[must_use]
    pub fn ed_app(mut self, ed_app: SoftwareApplication) -> Self {
        self.event.ed_app = Some(ed_app);
        self
    }

    #[must_use]
    pub fn group(mut self, group: Organization) -> Self {
        self.event.group = Some(group);
        self
    }

    #[must_use]
    pub fn membership(mut self, membership: Membership) -> Self {
        self.event.membership = Some(membership);
        self
    }

    #[must_use]
    pub fn federated_session(mut self, session: Session) -> Self {
        self.event.federated_session = Some(session);
        self
    }

    #[must_use]
    pub fn navigated_from(mut self, from: impl Into<Participant>) -> Self {
        self.event.navigated_from = Some(from.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Event {
        self.event
    }
}
