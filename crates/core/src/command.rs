// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use little_lemon_domain::Field;

/// A field interaction raised by the page, as data only.
///
/// Submission is not an event: it needs the submission and confirmation
/// collaborators and is driven through `ReservationForm::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a field changed.
    Change {
        /// The field that changed.
        field: Field,
        /// The new value.
        value: String,
    },
    /// A field lost focus.
    Blur {
        /// The field that lost focus.
        field: Field,
        /// The value the field held when it lost focus.
        value: String,
    },
}

impl FormEvent {
    /// Builds a change event from a form field name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn change(name: &str, value: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self::Change {
            field: name.parse()?,
            value: value.into(),
        })
    }

    /// Builds a blur event from a form field name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn blur(name: &str, value: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self::Blur {
            field: name.parse()?,
            value: value.into(),
        })
    }

    /// Returns the field this event concerns.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Change { field, .. } | Self::Blur { field, .. } => *field,
        }
    }
}
