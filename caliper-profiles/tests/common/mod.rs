//! Shared fixtures for profile tests.

#![allow(dead_code)]

use caliper_model::prelude::*;
use caliper_model::{DigitalResource, Frame, Person, Session, SoftwareApplication};
use caliper_profiles::{Bundle, LocalizeError, Localizer};
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Display string the built-in bundle gives `key`.
pub fn display(key: &str) -> String {
    Bundle::default_actions()
        .get(key)
        .expect("key in default bundle")
        .to_string()
}

pub fn person() -> Person {
    Person::builder()
        .id("https://example.edu/user/554433")
        .build()
        .unwrap()
}

pub fn app() -> SoftwareApplication {
    SoftwareApplication::builder()
        .id("https://example.com/viewer")
        .name("Readium")
        .build()
        .unwrap()
}

pub fn session() -> Session {
    Session::builder()
        .id("https://example.com/viewer/session-123456789")
        .actor(person())
        .started_at_time(Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap())
        .build()
        .unwrap()
}

pub fn epub() -> DigitalResource {
    DigitalResource::builder()
        .id("https://example.com/viewer/book/34843")
        .name("The Glorious Cause")
        .build()
        .unwrap()
}

pub fn frame() -> Frame {
    Frame::builder()
        .id("https://example.com/viewer/book/34843#epubcfi(/4/3/1)")
        .is_part_of("https://example.com/viewer/book/34843")
        .index(1)
        .build()
        .unwrap()
}

/// Wraps the built-in bundle and counts every lookup.
#[derive(Default)]
pub struct CountingLocalizer {
    calls: AtomicUsize,
}

impl CountingLocalizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Localizer for CountingLocalizer {
    fn resolve(&self, key: &str) -> Result<String, LocalizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Bundle::default_actions().resolve(key)
    }
}
