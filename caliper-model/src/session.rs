use crate::agent::Person;
use crate::entity::{BaseFields, Entity, EntityBase, EntityBuilder};
use caliper_conformance::check::check_required;
use caliper_conformance::{ConstructionResult, Violation};
use caliper_types::EntityType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A login session of a person on a software application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    actor: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ended_at_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
}

impl Session {
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder {
            base: BaseFields::new(EntityType::Session),
            actor: None,
            started_at_time: None,
            ended_at_time: None,
            duration: None,
        }
    }

    /// The person the session belongs to.
    #[must_use]
    pub fn actor(&self) -> Option<&Person> {
        self.actor.as_ref()
    }

    #[must_use]
    pub fn started_at_time(&self) -> Option<DateTime<Utc>> {
        self.started_at_time
    }

    #[must_use]
    pub fn ended_at_time(&self) -> Option<DateTime<Utc>> {
        self.ended_at_time
    }

    /// ISO-8601 duration, e.g. `PT3000S`.
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }
}

impl Entity for Session {
    const KIND: EntityType = EntityType::Session;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct SessionBuilder {
    base: BaseFields,
    actor: Option<Person>,
    started_at_time: Option<DateTime<Utc>>,
    ended_at_time: Option<DateTime<Utc>>,
    duration: Option<String>,
}

impl SessionBuilder {
    #[must_use]
    pub fn actor(mut self, actor: Person) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn started_at_time(mut self, at: DateTime<Utc>) -> Self {
        self.started_at_time = Some(at);
        self
    }

    #[must_use]
    pub fn ended_at_time(mut self, at: DateTime<Utc>) -> Self {
        self.ended_at_time = Some(at);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl EntityBuilder for SessionBuilder {
    type Output = Session;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<Session> {
        self.base.check_id()?;
        self.base.check_type(Session::KIND)?;

        if self.duration.is_some() {
            check_required("duration", self.duration.as_deref())?;
        }
        if let (Some(started), Some(ended)) = (self.started_at_time, self.ended_at_time) {
            if ended < started {
                let actual = ended.to_rfc3339();
                return Err(Violation::invalid_argument("endedAtTime", Some(&actual)).into());
            }
        }

        Ok(Session {
            base: self.base.freeze(),
            actor: self.actor,
            started_at_time: self.started_at_time,
            ended_at_time: self.ended_at_time,
            duration: self.duration,
        })
    }
}
