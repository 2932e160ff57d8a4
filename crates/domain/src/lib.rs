// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod dates;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailableSlots, FIRST_SEATING_HOUR, LAST_SEATING_HOUR, SeededRandom, TimeSlot,
    generate_slots, generate_slots_for_iso,
};
pub use dates::{format_iso_date, parse_iso_date};
pub use error::DomainError;
pub use types::{BookingDraft, DEFAULT_GUESTS, Field, Occasion, parse_guest_number};
pub use validation::{
    FieldError, MAX_GUESTS, MIN_GUESTS, MIN_NAME_LENGTH, MIN_PHONE_LENGTH, is_booking_valid,
    is_valid_email, is_valid_phone, validate_booking, validate_field,
};
