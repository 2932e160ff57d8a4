// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Confirmation, FixedClock, ReservationForm, SeededAvailability, Submission};
use little_lemon_domain::{BookingDraft, Field};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 10 - 19);
pub const TOMORROW: Date = date!(2026 - 10 - 20);

pub type TestForm = ReservationForm<FixedClock, SeededAvailability>;

pub fn create_test_form() -> TestForm {
    ReservationForm::new(FixedClock::new(TODAY), SeededAvailability)
}

/// Fills every required field with a valid value for tomorrow.
pub fn fill_valid_booking(form: &mut TestForm) {
    form.set_field(Field::Date, "2026-10-20");
    let first_slot: String = form.available_slots().first().to_string();
    form.set_field(Field::Time, first_slot);
    form.set_field(Field::Guests, "2");
    form.set_field(Field::Occasion, "birthday");
    form.set_field(Field::Name, "Jane Doe");
    form.set_field(Field::Email, "jane@example.com");
    form.set_field(Field::Phone, "(312) 555-1234");
}

/// A submission collaborator that records every booking it is handed.
pub struct RecordingSubmission {
    pub accept: bool,
    pub received: Vec<BookingDraft>,
}

impl RecordingSubmission {
    pub const fn accepting() -> Self {
        Self {
            accept: true,
            received: Vec::new(),
        }
    }

    pub const fn refusing() -> Self {
        Self {
            accept: false,
            received: Vec::new(),
        }
    }
}

impl Submission for RecordingSubmission {
    fn submit(&mut self, booking: BookingDraft) -> bool {
        self.received.push(booking);
        self.accept
    }
}

/// A confirmation collaborator that keeps what it was shown.
#[derive(Default)]
pub struct RecordingConfirmation {
    pub shown: Vec<BookingDraft>,
}

impl Confirmation for RecordingConfirmation {
    fn confirm(&mut self, booking: BookingDraft) {
        self.shown.push(booking);
    }
}
