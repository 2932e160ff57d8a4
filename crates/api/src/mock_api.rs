// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The simulated booking service.
//!
//! There is no real backend: availability comes from the seeded generator
//! and submissions are accepted in memory.

use little_lemon::{SlotProvider, Submission};
use little_lemon_domain::{AvailableSlots, BookingDraft, format_iso_date, generate_slots};
use time::Date;
use tracing::{debug, error, info, warn};

/// Fetches the open time slots for `date`.
#[must_use]
pub fn fetch_api(date: Date) -> AvailableSlots {
    let slots: AvailableSlots = generate_slots(date);
    debug!(
        date = %format_iso_date(date),
        slots = slots.len(),
        "Fetched available times"
    );
    slots
}

/// Submits a booking to the simulated service.
///
/// The service requires a date, time, party size, name and email; phone
/// is enforced upstream by the form. Returns whether the booking was
/// accepted.
#[must_use]
pub fn submit_api(booking: &BookingDraft) -> bool {
    let required: [(&str, &str); 5] = [
        ("date", booking.date.as_str()),
        ("time", booking.time.as_str()),
        ("guests", booking.guests.as_str()),
        ("name", booking.name.as_str()),
        ("email", booking.email.as_str()),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        error!(?missing, "Missing required booking information");
        return false;
    }

    info!(
        date = %booking.date,
        time = %booking.time,
        guests = %booking.guests,
        name = %booking.name,
        "Booking submitted"
    );
    true
}

/// The simulated booking service as a collaborator.
///
/// Accepted bookings are kept in memory so a host can inspect them. The
/// service can be switched to refuse every booking to exercise the retry
/// path.
#[derive(Debug, Clone)]
pub struct MockBookingApi {
    accepting: bool,
    accepted: Vec<BookingDraft>,
    attempts: usize,
}

impl MockBookingApi {
    /// Creates a service that accepts well-formed bookings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accepting: true,
            accepted: Vec::new(),
            attempts: 0,
        }
    }

    /// Creates a service that refuses every booking.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            accepting: false,
            accepted: Vec::new(),
            attempts: 0,
        }
    }

    /// Switches between accepting and refusing bookings.
    pub const fn set_accepting(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Returns the bookings accepted so far.
    #[must_use]
    pub fn accepted(&self) -> &[BookingDraft] {
        &self.accepted
    }

    /// Returns how many submissions were attempted.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Default for MockBookingApi {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotProvider for MockBookingApi {
    fn slots_for(&self, date: Date) -> AvailableSlots {
        fetch_api(date)
    }
}

impl Submission for MockBookingApi {
    fn submit(&mut self, booking: BookingDraft) -> bool {
        self.attempts += 1;

        if !self.accepting {
            warn!(name = %booking.name, "Booking service unavailable; reservation refused");
            return false;
        }

        if !submit_api(&booking) {
            return false;
        }

        self.accepted.push(booking);
        true
    }
}
