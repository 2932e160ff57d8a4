// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crate::confirmation::ConfirmationDetails;
use crate::error::ApiError;
use little_lemon::SUBMIT_ERROR_KEY;
use little_lemon_domain::{AvailableSlots, BookingDraft};
use std::collections::BTreeMap;

/// Heading shown once a reservation is confirmed.
pub const CONFIRMED_TITLE: &str = "Booking Confirmed!";

/// API request to book a table.
///
/// Values arrive as entered; the form validates them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Reservation date as `YYYY-MM-DD`.
    pub date: String,
    /// Time slot, e.g. `19:30`.
    pub time: String,
    /// Party size, sent as a number or as the text of a number input.
    #[serde(deserialize_with = "guests_from_text_or_number")]
    pub guests: String,
    /// Occasion value, e.g. `birthday`.
    pub occasion: String,
    /// Guest name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional special requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl BookingRequest {
    /// Converts the request into the draft the form edits.
    #[must_use]
    pub fn to_draft(&self) -> BookingDraft {
        BookingDraft {
            date: self.date.clone(),
            time: self.time.clone(),
            guests: self.guests.clone(),
            occasion: self.occasion.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            special_requests: self.special_requests.clone().unwrap_or_default(),
        }
    }
}

/// A party size as it may arrive on the wire.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum GuestsValue {
    Text(String),
    Whole(i64),
    Decimal(f64),
}

fn guests_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: GuestsValue = serde::Deserialize::deserialize(deserializer)?;
    Ok(match value {
        GuestsValue::Text(text) => text,
        GuestsValue::Whole(number) => number.to_string(),
        GuestsValue::Decimal(number) => number.to_string(),
    })
}

/// API response listing the slots open on a date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    /// The open slots in chronological order.
    pub slots: Vec<String>,
}

impl AvailabilityResponse {
    /// Builds the response for `date`.
    #[must_use]
    pub fn new(date: String, slots: &AvailableSlots) -> Self {
        Self {
            date,
            slots: slots.to_strings(),
        }
    }
}

/// API response for a confirmed reservation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResponse {
    /// The confirmation heading.
    pub title: String,
    /// The greeting addressed to the guest.
    pub message: String,
    /// The reservation details.
    pub booking: ConfirmationDetails,
    /// The note about the confirmation email.
    pub follow_up: String,
}

impl From<ConfirmationDetails> for ConfirmationResponse {
    fn from(booking: ConfirmationDetails) -> Self {
        Self {
            title: String::from(CONFIRMED_TITLE),
            message: booking.headline(),
            follow_up: booking.follow_up(),
            booking,
        }
    }
}

/// API response for a reservation that was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationErrorResponse {
    /// Summary of the failure.
    pub message: String,
    /// Messages keyed by field name; `submit` holds form-level errors.
    pub errors: BTreeMap<String, String>,
}

impl From<&ApiError> for ValidationErrorResponse {
    fn from(err: &ApiError) -> Self {
        let errors: BTreeMap<String, String> = match err {
            ApiError::ValidationFailed { errors } => errors.clone(),
            ApiError::InvalidInput { field, message } => {
                BTreeMap::from([(field.clone(), message.clone())])
            }
            ApiError::SubmissionRejected { message } => {
                BTreeMap::from([(String::from(SUBMIT_ERROR_KEY), message.clone())])
            }
            ApiError::AlreadySubmitted => {
                BTreeMap::from([(String::from(SUBMIT_ERROR_KEY), err.to_string())])
            }
        };

        Self {
            message: err.to_string(),
            errors,
        }
    }
}
