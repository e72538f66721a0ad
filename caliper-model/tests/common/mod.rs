//! Shared fixtures for model tests.

#![allow(dead_code)]

use caliper_model::prelude::*;
use caliper_model::{DigitalResource, Frame, Person, Session, SoftwareApplication};
use chrono::{TimeZone, Utc};

pub const PERSON_ID: &str = "https://example.edu/user/554433";
pub const COURSE_ID: &str = "https://example.edu/politicalScience/2015/american-revolution-101";
pub const APP_ID: &str = "https://example.com/viewer";

pub fn person() -> Person {
    Person::builder()
        .id(PERSON_ID)
        .date_created(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap())
        .build()
        .unwrap()
}

pub fn app() -> SoftwareApplication {
    SoftwareApplication::builder()
        .id(APP_ID)
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
