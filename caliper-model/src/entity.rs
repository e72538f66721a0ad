use caliper_conformance::check::{self, CheckResult};
use caliper_conformance::ConstructionResult;
use caliper_types::EntityType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fields every entity carries, frozen at build time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@type")]
    type_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_modified: Option<DateTime<Utc>>,
}

/// Read-only view shared by every entity kind.
pub trait Entity {
    /// The kind this entity was built as.
    const KIND: EntityType;

    fn base(&self) -> &EntityBase;

    fn id(&self) -> &str {
        &self.base().id
    }

    /// The entity's type tag; always `Self::KIND.uri()`.
    fn type_uri(&self) -> &str {
        &self.base().type_uri
    }

    fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.base().description.as_deref()
    }

    fn extensions(&self) -> Option<&serde_json::Value> {
        self.base().extensions.as_ref()
    }

    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.base().date_created
    }

    fn date_modified(&self) -> Option<DateTime<Utc>> {
        self.base().date_modified
    }
}

/// Staged values for the fields in [`EntityBase`].
///
/// Nothing is checked when a value is staged; builders run the checks in
/// `build()`.
#[derive(Debug, Clone)]
pub struct BaseFields {
    id: Option<String>,
    type_uri: String,
    name: Option<String>,
    description: Option<String>,
    extensions: Option<serde_json::Value>,
    date_created: Option<DateTime<Utc>>,
    date_modified: Option<DateTime<Utc>>,
}

impl BaseFields {
    pub(crate) fn new(kind: EntityType) -> Self {
        Self {
            id: None,
            type_uri: kind.uri().to_string(),
            name: None,
            description: None,
            extensions: None,
            date_created: None,
            date_modified: None,
        }
    }

    pub(crate) fn check_id(&self) -> CheckResult {
        check::check_id("id", self.id.as_deref())
    }

    pub(crate) fn check_type(&self, kind: EntityType) -> CheckResult {
        check::check_type_uri(&self.type_uri, kind)
    }

    /// Freezes the staged values. Callers must have run `check_id` and
    /// `check_type` first.
    pub(crate) fn freeze(self) -> EntityBase {
        EntityBase {
            id: self.id.unwrap_or_default(),
            type_uri: self.type_uri,
            name: self.name,
            description: self.description,
            extensions: self.extensions,
            date_created: self.date_created,
            date_modified: self.date_modified,
        }
    }
}

/// Fluent staging for an entity kind.
///
/// Setters only record values. `build()` validates everything at once, in a
/// fixed order (required fields, then the type tag, then enumerated fields),
/// and returns the first failure.
pub trait EntityBuilder: Sized {
    type Output: Entity;

    /// Staged common fields.
    fn base_mut(&mut self) -> &mut BaseFields;

    /// Validates the staged values and produces the entity.
    fn build(self) -> ConstructionResult<Self::Output>;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.base_mut().id = Some(id.into());
        self
    }

    fn name(mut self, name: impl Into<String>) -> Self {
        self.base_mut().name = Some(name.into());
        self
    }

    fn description(mut self, description: impl Into<String>) -> Self {
        self.base_mut().description = Some(description.into());
        self
    }

    fn extensions(mut self, extensions: serde_json::Value) -> Self {
        self.base_mut().extensions = Some(extensions);
        self
    }

    fn date_created(mut self, at: DateTime<Utc>) -> Self {
        self.base_mut().date_created = Some(at);
        self
    }

    fn date_modified(mut self, at: DateTime<Utc>) -> Self {
        self.base_mut().date_modified = Some(at);
        self
    }

    /// Overrides the staged type tag, e.g. with the tag of a record being
    /// rehydrated. A tag that is not `Output::KIND`'s fails `build()`.
    fn declared_type(mut self, type_uri: impl Into<String>) -> Self {
        self.base_mut().type_uri = type_uri.into();
        self
    }
}
