//! Digital resources and the pages and frames within them.

use crate::entity::{BaseFields, Entity, EntityBase, EntityBuilder};
use caliper_conformance::check::{check_optional_id, CheckResult};
use caliper_conformance::ConstructionResult;
use caliper_types::EntityType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Descriptive fields shared by every resource kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_part_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl ResourceFields {
    fn check(&self) -> CheckResult {
        check_optional_id("isPartOf", self.is_part_of.as_deref())
    }
}

/// Accessors shared by [`DigitalResource`], [`WebPage`] and [`Frame`].
macro_rules! resource_accessors {
    () => {
        #[must_use]
        pub fn media_type(&self) -> Option<&str> {
            self.resource.media_type.as_deref()
        }

        #[must_use]
        pub fn keywords(&self) -> &[String] {
            &self.resource.keywords
        }

        /// Identifier of the resource this one is part of.
        #[must_use]
        pub fn is_part_of(&self) -> Option<&str> {
            self.resource.is_part_of.as_deref()
        }

        #[must_use]
        pub fn date_published(&self) -> Option<DateTime<Utc>> {
            self.resource.date_published
        }

        #[must_use]
        pub fn version(&self) -> Option<&str> {
            self.resource.version.as_deref()
        }
    };
}

/// Staging setters shared by the resource builders.
macro_rules! resource_setters {
    () => {
        #[must_use]
        pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
            self.resource.media_type = Some(media_type.into());
            self
        }

        #[must_use]
        pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
            self.resource.keywords.push(keyword.into());
            self
        }

        #[must_use]
        pub fn is_part_of(mut self, parent_id: impl Into<String>) -> Self {
            self.resource.is_part_of = Some(parent_id.into());
            self
        }

        #[must_use]
        pub fn date_published(mut self, at: DateTime<Utc>) -> Self {
            self.resource.date_published = Some(at);
            self
        }

        #[must_use]
        pub fn version(mut self, version: impl Into<String>) -> Self {
            self.resource.version = Some(version.into());
            self
        }
    };
}

/// A generic digital resource, such as a reading or an ebook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitalResource {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: ResourceFields,
}

impl DigitalResource {
    #[must_use]
    pub fn builder() -> DigitalResourceBuilder {
        DigitalResourceBuilder {
            base: BaseFields::new(EntityType::DigitalResource),
            resource: ResourceFields::default(),
        }
    }

    resource_accessors!();
}

impl Entity for DigitalResource {
    const KIND: EntityType = EntityType::DigitalResource;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct DigitalResourceBuilder {
    base: BaseFields,
    resource: ResourceFields,
}

impl DigitalResourceBuilder {
    resource_setters!();
}

impl EntityBuilder for DigitalResourceBuilder {
    type Output = DigitalResource;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<DigitalResource> {
        self.base.check_id()?;
        self.base.check_type(DigitalResource::KIND)?;
        self.resource.check()?;
        Ok(DigitalResource {
            base: self.base.freeze(),
            resource: self.resource,
        })
    }
}

/// A single web page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: ResourceFields,
}

impl WebPage {
    #[must_use]
    pub fn builder() -> WebPageBuilder {
        WebPageBuilder {
            base: BaseFields::new(EntityType::WebPage),
            resource: ResourceFields::default(),
        }
    }

    resource_accessors!();
}

impl Entity for WebPage {
    const KIND: EntityType = EntityType::WebPage;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct WebPageBuilder {
    base: BaseFields,
    resource: ResourceFields,
}

impl WebPageBuilder {
    resource_setters!();
}

impl EntityBuilder for WebPageBuilder {
    type Output = WebPage;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<WebPage> {
        self.base.check_id()?;
        self.base.check_type(WebPage::KIND)?;
        self.resource.check()?;
        Ok(WebPage {
            base: self.base.freeze(),
            resource: self.resource,
        })
    }
}

/// A positioned part of a larger resource, e.g. a page of an ebook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: ResourceFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
}

impl Frame {
    #[must_use]
    pub fn builder() -> FrameBuilder {
        FrameBuilder {
            base: BaseFields::new(EntityType::Frame),
            resource: ResourceFields::default(),
            index: None,
        }
    }

    resource_accessors!();

    /// Position of the frame within its parent resource.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.index
    }
}

impl Entity for Frame {
    const KIND: EntityType = EntityType::Frame;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct FrameBuilder {
    base: BaseFields,
    resource: ResourceFields,
    index: Option<u32>,
}

impl FrameBuilder {
    resource_setters!();

    #[must_use]
    pub fn index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

impl EntityBuilder for FrameBuilder {
    type Output = Frame;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<Frame> {
        self.base.check_id()?;
        self.base.check_type(Frame::KIND)?;
        self.resource.check()?;
        Ok(Frame {
            base: self.base.freeze(),
            resource: self.resource,
            index: self.index,
        })
    }
}
