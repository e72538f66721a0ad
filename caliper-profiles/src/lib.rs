//! Profile-scoped event validation for Caliper.
//!
//! A [`Profile`] is a named, closed set of actions. Each action key is bound
//! to one [`StructuralValidator`] in an [`ActionRegistry`], which also holds a
//! reverse index from the localized display string of every key back to the
//! key. Validating an event resolves its raw action string through that index
//! and runs the bound validator; an unmatched action runs the sentinel
//! `action.unrecognized` validator instead.
//!
//! # Design Principles
//!
//! - **Build once**: a profile's registry is built on first use under a
//!   single-initialization guard and is read-only afterwards
//! - **Report everything**: event validation collects every violation
//! - **Injected localization**: display strings come from a [`Localizer`]
//!   passed in at profile definition, usually a [`Bundle`]

mod config;
mod error;
mod localize;
mod profile;
mod registry;
mod validator;

pub mod profiles;

pub use config::{CaliperConfig, LocalizationConfig, DEFAULT_CONFIG_FILE};
pub use error::{ProfileError, ProfileResult};
pub use localize::{Bundle, LocalizeError, Localizer};
pub use profile::Profile;
pub use registry::{ActionDefinition, ActionRegistry, UNRECOGNIZED};
pub use validator::{RoleRule, RoleValidator, StructuralValidator, UnrecognizedValidator};

pub use caliper_conformance::{Conformance, ValidatorResult, Violation};
