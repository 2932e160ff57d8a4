// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundaries the reservation form talks to.
//!
//! The form owns none of these concerns: the host decides what "today" is,
//! where availability comes from, how a booking is accepted, and how a
//! confirmation is presented.

use little_lemon_domain::{AvailableSlots, BookingDraft, generate_slots, parse_iso_date};
use time::{Date, OffsetDateTime};

/// Supplies the current calendar date.
pub trait Clock {
    /// Returns today's date. Reservations before it are rejected.
    fn today(&self) -> Date;
}

/// The system clock, reporting the UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock stopped on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }
}

/// Produces the open slots for a date.
pub trait SlotProvider {
    /// Returns the slots open on `date`.
    fn slots_for(&self, date: Date) -> AvailableSlots;

    /// Returns the slots open on a `YYYY-MM-DD` date.
    ///
    /// A value that is not a calendar date yields the fallback slots.
    fn slots_for_iso(&self, date: &str) -> AvailableSlots {
        parse_iso_date(date).map_or_else(|_| AvailableSlots::fallback(), |d| self.slots_for(d))
    }
}

/// Availability from the seeded day-of-month generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededAvailability;

impl SlotProvider for SeededAvailability {
    fn slots_for(&self, date: Date) -> AvailableSlots {
        generate_slots(date)
    }
}

impl<F> SlotProvider for F
where
    F: Fn(Date) -> AvailableSlots,
{
    fn slots_for(&self, date: Date) -> AvailableSlots {
        self(date)
    }
}

/// Accepts a booking on behalf of the restaurant.
pub trait Submission {
    /// Submits a copy of the draft. Returns whether it was accepted.
    fn submit(&mut self, booking: BookingDraft) -> bool;
}

impl<F> Submission for F
where
    F: FnMut(BookingDraft) -> bool,
{
    fn submit(&mut self, booking: BookingDraft) -> bool {
        self(booking)
    }
}

/// Receives an accepted booking for read-only presentation.
pub trait Confirmation {
    /// Presents the accepted booking.
    fn confirm(&mut self, booking: BookingDraft);
}

impl<F> Confirmation for F
where
    F: FnMut(BookingDraft),
{
    fn confirm(&mut self, booking: BookingDraft) {
        self(booking);
    }
}
