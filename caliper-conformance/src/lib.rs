//! Conformance primitives for Caliper.
//!
//! - [`Conformance`]: the closed catalog of violation kinds and their templates
//! - [`Violation`]: one occurrence of a catalog entry with its context filled in
//! - [`ValidatorResult`]: the ordered, read-only report of one validation pass
//! - [`check`]: pure field validators used by entity builders
//! - [`ConstructionError`]: the fatal error a failed `build()` returns
//!
//! Entity construction is fail-fast and surfaces a single violation.
//! Event validation aggregates every violation it finds into a result.

pub mod check;

mod catalog;
mod error;
mod result;
mod violation;

pub use catalog::Conformance;
pub use error::{ConstructionError, ConstructionResult};
pub use result::ValidatorResult;
pub use violation::Violation;
