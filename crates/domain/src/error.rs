// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting reservation values.
///
/// These describe malformed values handed to the domain by a host
/// (a CLI argument, a JSON request). User-correctable form problems are
/// reported through [`crate::FieldError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A time slot was not in `H:MM` form within the service window.
    InvalidTimeSlot(String),
    /// A field name did not match any reservation form field.
    UnknownField(String),
    /// An occasion value did not match any known occasion.
    InvalidOccasion(String),
    /// A guest count could not be interpreted as a whole number.
    InvalidGuestCount(String),
    /// A required booking value was missing.
    MissingValue {
        /// The name of the missing field.
        field: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidTimeSlot(value) => {
                write!(
                    f,
                    "Invalid time slot '{value}': expected H:MM between 17:00 and 23:30"
                )
            }
            Self::UnknownField(name) => write!(f, "Unknown reservation field '{name}'"),
            Self::InvalidOccasion(value) => write!(f, "Invalid occasion '{value}'"),
            Self::InvalidGuestCount(value) => write!(f, "Invalid guest count '{value}'"),
            Self::MissingValue { field } => write!(f, "Missing value for field '{field}'"),
        }
    }
}

impl std::error::Error for DomainError {}
