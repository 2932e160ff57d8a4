// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use little_lemon_domain::{Field, FieldError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// The key under which the form-level submission error is reported.
pub const SUBMIT_ERROR_KEY: &str = "submit";

/// A form-level failure not tied to any single field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize)]
pub enum SubmitError {
    /// The submission collaborator refused the booking.
    #[error("Failed to submit reservation. Please try again.")]
    Rejected,
}

/// Current error per field, plus the reserved submission error.
///
/// A field with no entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrorMap {
    fields: BTreeMap<Field, FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit: Option<SubmitError>,
}

impl FieldErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            submit: None,
        }
    }

    /// Creates a map holding only the given submission error.
    #[must_use]
    pub const fn from_submit_error(error: SubmitError) -> Self {
        Self {
            fields: BTreeMap::new(),
            submit: Some(error),
        }
    }

    /// Records the outcome of validating `field`, clearing any earlier error
    /// when the field now passes.
    pub fn record(&mut self, field: Field, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.fields.remove(&field);
            }
            Err(error) => {
                self.fields.insert(field, error);
            }
        }
    }

    /// Returns the current error for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.fields.get(&field).copied()
    }

    /// Returns the form-level submission error.
    #[must_use]
    pub const fn submit_error(&self) -> Option<SubmitError> {
        self.submit
    }

    /// Returns whether the map holds no error at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }

    /// Returns the number of errors, counting the submission error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.submit.is_some())
    }

    /// Iterates over field errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.fields.iter().map(|(field, error)| (*field, *error))
    }

    /// Returns every message keyed by field name, with the submission error
    /// under [`SUBMIT_ERROR_KEY`].
    #[must_use]
    pub fn messages(&self) -> BTreeMap<String, String> {
        let mut messages: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|(field, error)| (field.as_str().to_string(), error.to_string()))
            .collect();
        if let Some(error) = self.submit {
            messages.insert(SUBMIT_ERROR_KEY.to_string(), error.to_string());
        }
        messages
    }
}

impl FromIterator<(Field, FieldError)> for FieldErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            submit: None,
        }
    }
}

/// The fields the user has interacted with.
///
/// Field errors are only shown for touched fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TouchedSet {
    fields: BTreeSet<Field>,
}

impl TouchedSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeSet::new(),
        }
    }

    /// Marks `field` as touched.
    pub fn touch(&mut self, field: Field) {
        self.fields.insert(field);
    }

    /// Marks every form field as touched.
    pub fn touch_all(&mut self) {
        self.fields.extend(Field::ALL);
    }

    /// Returns whether `field` has been touched.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Returns the number of touched fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether no field has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the touched fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }
}

/// The result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was submitted.
    Invalid(FieldErrorMap),
    /// The submission collaborator refused the booking. The form stays
    /// editable for a retry.
    Rejected,
    /// The booking was accepted and handed to the confirmation collaborator.
    Confirmed,
    /// A submission is already in flight or has completed; nothing was done.
    InFlight,
}

impl SubmitOutcome {
    /// Returns whether the booking was accepted.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
