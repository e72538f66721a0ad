//! Profiles shipped with the core.
//!
//! Each submodule exposes its action keys, its definitions, a constructor
//! taking an injected localizer, and a process-wide default instance
//! localized with the built-in English bundle.

pub mod reading;
pub mod session;
