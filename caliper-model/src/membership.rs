//! Membership: the relationship between a person and an organization.

use crate::entity::{BaseFields, Entity, EntityBase, EntityBuilder};
use caliper_conformance::check::{check_enum_member, check_id, check_membership_status, check_present};
use caliper_conformance::{ConstructionResult, Violation};
use caliper_types::{EntityType, Role, Status};
use serde::Serialize;
use std::str::FromStr;

/// Relates a member (always a person) to an organization it belongs to.
///
/// Status applies to every role the member holds in the organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    #[serde(flatten)]
    base: EntityBase,
    member_id: String,
    organization_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    roles: Vec<Role>,
    status: Status,
}

impl Membership {
    #[must_use]
    pub fn builder() -> MembershipBuilder {
        MembershipBuilder {
            base: BaseFields::new(EntityType::Membership),
            member_id: None,
            organization_id: None,
            roles: Vec::new(),
            status: None,
        }
    }

    /// Identifier of the person holding the membership.
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// Identifier of the organization the membership is in.
    #[must_use]
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }
}

impl Entity for Membership {
    const KIND: EntityType = EntityType::Membership;

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone)]
pub struct MembershipBuilder {
    base: BaseFields,
    member_id: Option<String>,
    organization_id: Option<String>,
    roles: Vec<String>,
    status: Option<String>,
}

impl MembershipBuilder {
    #[must_use]
    pub fn member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    #[must_use]
    pub fn organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Adds one role by name.
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Replaces the staged roles.
    #[must_use]
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Stages the status by name; must be one of `Active`, `Inactive`, `Deleted`.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl EntityBuilder for MembershipBuilder {
    type Output = Membership;

    fn base_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    fn build(self) -> ConstructionResult<Membership> {
        self.base.check_id()?;
        check_id("memberId", self.member_id.as_deref())?;
        check_id("organizationId", self.organization_id.as_deref())?;
        check_present("status", self.status.as_deref())?;
        self.base.check_type(Membership::KIND)?;

        let raw_status = self.status.unwrap_or_default();
        check_membership_status(&raw_status)?;
        let status = Status::from_str(&raw_status)
            .map_err(|_| Violation::invalid_enum_value("status", &Status::NAMES, &raw_status))?;

        let role_names = Role::ALL.map(|r| r.as_str());
        let mut roles = Vec::with_capacity(self.roles.len());
        for raw in &self.roles {
            check_enum_member("roles", raw, &role_names)?;
            if let Ok(role) = Role::from_str(raw) {
                roles.push(role);
            }
        }

        Ok(Membership {
            base: self.base.freeze(),
            member_id: self.member_id.unwrap_or_default(),
            organization_id: self.organization_id.unwrap_or_default(),
            roles,
            status,
        })
    }
}
