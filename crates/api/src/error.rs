// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use little_lemon::{CoreError, FieldErrorMap};
use little_lemon_domain::DomainError;
use std::collections::BTreeMap;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// None of them is fatal: each is recoverable by correcting the request or
/// retrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// One or more form fields failed validation.
    ValidationFailed {
        /// Messages keyed by field name.
        errors: BTreeMap<String, String>,
    },
    /// The booking service refused the reservation.
    SubmissionRejected {
        /// The message shown to the guest.
        message: String,
    },
    /// A submission was already made from this form.
    AlreadySubmitted,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ValidationFailed { errors } => {
                let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            Self::SubmissionRejected { message } => write!(f, "{message}"),
            Self::AlreadySubmitted => {
                write!(f, "This reservation has already been submitted")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<&FieldErrorMap> for ApiError {
    fn from(errors: &FieldErrorMap) -> Self {
        Self::ValidationFailed {
            errors: errors.messages(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidTimeSlot(value) => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("'{value}' is not an offered time slot"),
        },
        DomainError::UnknownField(name) => ApiError::InvalidInput {
            field: name,
            message: String::from("Unknown reservation field"),
        },
        DomainError::InvalidOccasion(value) => ApiError::InvalidInput {
            field: String::from("occasion"),
            message: format!("'{value}' is not a known occasion"),
        },
        DomainError::InvalidGuestCount(value) => ApiError::InvalidInput {
            field: String::from("guests"),
            message: format!("'{value}' is not a number of guests"),
        },
        DomainError::MissingValue { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("A value is required"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
