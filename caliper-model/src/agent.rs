//! Agents: people, organizations and software applications.

use crate::entity::{BaseFields, Entity, EntityBase, EntityBuilder};
use caliper_conformance::check::check_optional_id;
use caliper_conformance::ConstructionResult;
use caliper_types::EntityType;
use serde::Serialize;

/// A human learner, instructor or other participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(flatten)]
    base: EntityBase,
}

impl Person {
    #[must_use]
    pub fn builder() -> PersonBuilder {
        PersonBuilder {
            base: BaseFields::new(EntityType::Person),
        }
    }
}

impl Entity for Person {
    const KIND: EntityType = EntityType::Person;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct PersonBuilder {
    base: BaseFields,
}

impl EntityBuilder for PersonBuilder {
    type Output = Person;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<Person> {
        self.base.check_id()?;
        self.base.check_type(Person::KIND)?;
        Ok(Person {
            base: self.base.freeze(),
        })
    }
}

/// A group of agents: a course section, institution or study group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_organization_of: Option<String>,
}

impl Organization {
    #[must_use]
    pub fn builder() -> OrganizationBuilder {
        OrganizationBuilder {
            base: BaseFields::new(EntityType::Organization),
            sub_organization_of: None,
        }
    }

    /// Identifier of the parent organization, if any.
    #[must_use]
    pub fn sub_organization_of(&self) -> Option<&str> {
        self.sub_organization_of.as_deref()
    }
}

impl Entity for Organization {
    const KIND: EntityType = EntityType::Organization;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    base: BaseFields,
    sub_organization_of: Option<String>,
}

impl OrganizationBuilder {
    #[must_use]
    pub fn sub_organization_of(mut self, parent_id: impl Into<String>) -> Self {
        self.sub_organization_of = Some(parent_id.into());
        self
    }
}

impl EntityBuilder for OrganizationBuilder {
    type Output = Organization;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<Organization> {
        self.base.check_id()?;
        self.base.check_type(Organization::KIND)?;
        check_optional_id("subOrganizationOf", self.sub_organization_of.as_deref())?;
        Ok(Organization {
            base: self.base.freeze(),
            sub_organization_of: self.sub_organization_of,
        })
    }
}

/// A platform or tool that learners interact with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftwareApplication {
    #[serde(flatten)]
    base: EntityBase,
}

impl SoftwareApplication {
    #[must_use]
    pub fn builder() -> SoftwareApplicationBuilder {
        SoftwareApplicationBuilder {
            base: BaseFields::new(EntityType::SoftwareApplication),
        }
    }
}

impl Entity for SoftwareApplication {
    const KIND: EntityType = EntityType::SoftwareApplication;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct SoftwareApplicationBuilder {
    base: BaseFields,
}

impl EntityBuilder for SoftwareApplicationBuilder {
    type Output = SoftwareApplication;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<SoftwareApplication> {
        self.base.check_id()?;
        self.base.check_type(SoftwareApplication::KIND)?;
        Ok(SoftwareApplication {
            base: self.base.freeze(),
        })
    }
}
