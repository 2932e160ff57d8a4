// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::parse_iso_date;
use crate::types::{BookingDraft, Field, parse_guest_number};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

/// Smallest party the restaurant seats.
pub const MIN_GUESTS: u8 = 1;

/// Largest party that can be booked online.
pub const MAX_GUESTS: u8 = 10;

/// Minimum number of characters in a guest name.
///
/// Characters are Unicode scalar values, so a name made of a single
/// astral-plane character such as "𝒜" is one character long and too short.
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum number of characters in a phone number.
pub const MIN_PHONE_LENGTH: usize = 10;

/// A user-correctable problem with a single form field.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Date is required")]
    DateRequired,
    #[error("Please enter a valid date")]
    InvalidDate,
    #[error("Date must be today or in the future")]
    DateInPast,
    #[error("Time is required")]
    TimeRequired,
    #[error("Number of guests is required")]
    GuestsRequired,
    #[error("At least 1 guest is required")]
    TooFewGuests,
    #[error("Maximum 10 guests allowed")]
    TooManyGuests,
    #[error("Please select an occasion")]
    OccasionRequired,
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

impl FieldError {
    /// Returns the message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Validates a single form field value.
///
/// This function is pure: it looks only at `value` and at `today`, the
/// earliest date a reservation may be made for. Time of day plays no part.
///
/// # Errors
///
/// Returns the `FieldError` describing the first rule the value breaks.
/// `Field::SpecialRequests` is optional and always passes.
pub fn validate_field(field: Field, value: &str, today: Date) -> Result<(), FieldError> {
    match field {
        Field::Date => validate_date(value, today),
        Field::Time => {
            // The slot list restricts the choices; only presence is checked.
            if value.is_empty() {
                return Err(FieldError::TimeRequired);
            }
            Ok(())
        }
        Field::Guests => validate_guests(value),
        Field::Occasion => {
            if value.is_empty() {
                return Err(FieldError::OccasionRequired);
            }
            Ok(())
        }
        Field::Name => {
            if value.is_empty() {
                return Err(FieldError::NameRequired);
            }
            if value.chars().count() < MIN_NAME_LENGTH {
                return Err(FieldError::NameTooShort);
            }
            Ok(())
        }
        Field::Email => {
            if value.is_empty() {
                return Err(FieldError::EmailRequired);
            }
            if !is_valid_email(value) {
                return Err(FieldError::InvalidEmail);
            }
            Ok(())
        }
        Field::Phone => {
            if value.is_empty() {
                return Err(FieldError::PhoneRequired);
            }
            if !is_valid_phone(value) {
                return Err(FieldError::InvalidPhone);
            }
            Ok(())
        }
        Field::SpecialRequests => Ok(()),
    }
}

fn validate_date(value: &str, today: Date) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::DateRequired);
    }
    let date: Date = parse_iso_date(value).map_err(|_| FieldError::InvalidDate)?;
    if date < today {
        return Err(FieldError::DateInPast);
    }
    Ok(())
}

/// Party size is compared numerically. A fractional size inside the range,
/// such as "2.5", passes: the number input allows it.
fn validate_guests(value: &str) -> Result<(), FieldError> {
    // A number input reports no value at all for text it cannot read.
    let Some(guests) = parse_guest_number(value) else {
        return Err(FieldError::GuestsRequired);
    };
    if guests < f64::from(MIN_GUESTS) {
        return Err(FieldError::TooFewGuests);
    }
    if guests > f64::from(MAX_GUESTS) {
        return Err(FieldError::TooManyGuests);
    }
    Ok(())
}

/// Checks an address against `local@domain.tld`.
///
/// The address may not contain whitespace and must contain exactly one `@`
/// with a non-empty local part before it. The domain after it must contain
/// a `.` with at least one character on either side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Checks a phone number: at least ten characters, each a digit, a space,
/// a hyphen, a parenthesis or a plus sign.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let mut length: usize = 0;
    for c in phone.chars() {
        if !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')) {
            return false;
        }
        length += 1;
    }
    length >= MIN_PHONE_LENGTH
}

/// Validates every required field of `draft`.
///
/// Returns the failing fields with their errors, in form order. An empty
/// result means the booking may be submitted.
#[must_use]
pub fn validate_booking(draft: &BookingDraft, today: Date) -> Vec<(Field, FieldError)> {
    Field::REQUIRED
        .iter()
        .filter_map(|field| {
            validate_field(*field, draft.value(*field), today)
                .err()
                .map(|error| (*field, error))
        })
        .collect()
}

/// Returns whether every required field of `draft` passes validation.
#[must_use]
pub fn is_booking_valid(draft: &BookingDraft, today: Date) -> bool {
    Field::REQUIRED
        .iter()
        .all(|field| validate_field(*field, draft.value(*field), today).is_ok())
}
