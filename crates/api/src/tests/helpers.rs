// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use little_lemon::FixedClock;
use little_lemon_domain::BookingDraft;
use time::Date;
use time::macros::date;

use crate::{BookingApp, BookingRequest};

pub const TODAY: Date = date!(2026 - 10 - 19);

pub fn create_test_clock() -> FixedClock {
    FixedClock::new(TODAY)
}

pub fn create_test_app() -> BookingApp<FixedClock> {
    BookingApp::new(create_test_clock())
}

/// A complete booking for tomorrow at the first slot of the evening.
pub fn create_valid_draft() -> BookingDraft {
    BookingDraft {
        date: String::from("2026-10-20"),
        time: String::from("17:00"),
        guests: String::from("4"),
        occasion: String::from("anniversary"),
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::from("(312) 555-1234"),
        special_requests: String::new(),
    }
}

pub fn create_valid_request() -> BookingRequest {
    BookingRequest {
        date: String::from("2026-10-20"),
        time: String::from("17:00"),
        guests: String::from("4"),
        occasion: String::from("anniversary"),
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::from("(312) 555-1234"),
        special_requests: None,
    }
}
