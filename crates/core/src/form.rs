// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::{Clock, Confirmation, SlotProvider, Submission};
use crate::command::FormEvent;
use crate::error::CoreError;
use crate::state::{FieldErrorMap, SubmitError, SubmitOutcome, TouchedSet};
use little_lemon_domain::{
    AvailableSlots, BookingDraft, Field, FieldError, format_iso_date, is_booking_valid,
    validate_booking, validate_field,
};
use time::Date;

/// The table reservation form.
///
/// The form exclusively owns the draft being edited, the per-field errors,
/// the set of touched fields and the `submitting` flag. The slots offered
/// for the chosen date come from the injected `SlotProvider`; there is no
/// shared store.
///
/// Every operation is synchronous and local to the instance.
#[derive(Debug, Clone)]
pub struct ReservationForm<C, P> {
    clock: C,
    provider: P,
    draft: BookingDraft,
    available: AvailableSlots,
    errors: FieldErrorMap,
    touched: TouchedSet,
    submitting: bool,
}

impl<C: Clock, P: SlotProvider> ReservationForm<C, P> {
    /// Creates a form with default values, offering today's slots.
    #[must_use]
    pub fn new(clock: C, provider: P) -> Self {
        let available: AvailableSlots = provider.slots_for(clock.today());
        Self::with_available_slots(clock, provider, available)
    }

    /// Creates a form offering `available` until a date is chosen.
    #[must_use]
    pub fn with_available_slots(clock: C, provider: P, available: AvailableSlots) -> Self {
        Self {
            clock,
            provider,
            draft: BookingDraft::default(),
            available,
            errors: FieldErrorMap::new(),
            touched: TouchedSet::new(),
            submitting: false,
        }
    }

    /// Returns the draft being edited.
    #[must_use]
    pub const fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns the slots currently offered.
    #[must_use]
    pub const fn available_slots(&self) -> &AvailableSlots {
        &self.available
    }

    /// Returns the current errors, touched or not.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    /// Returns the fields the user has interacted with.
    #[must_use]
    pub const fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    /// Returns whether a submission is in flight or has completed.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns today's date according to the injected clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Returns the earliest selectable date as `YYYY-MM-DD`.
    #[must_use]
    pub fn min_date(&self) -> String {
        format_iso_date(self.clock.today())
    }

    /// Updates a field value.
    ///
    /// Choosing a non-empty date regenerates the offered slots and clears
    /// the selected time, which may no longer be offered. A touched field
    /// is re-validated immediately.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value: String = value.into();

        if field == Field::Date && !value.is_empty() {
            self.available = self.provider.slots_for_iso(&value);
            self.draft.time.clear();
        }

        if self.touched.contains(field) {
            let result: Result<(), FieldError> = self.validate_field(field, &value);
            self.errors.record(field, result);
        }

        self.draft.set_value(field, value);
    }

    /// Marks a field as touched and validates the value it held.
    pub fn blur_field(&mut self, field: Field, value: &str) {
        self.touched.touch(field);
        let result: Result<(), FieldError> = self.validate_field(field, value);
        self.errors.record(field, result);
    }

    /// Updates a field identified by its form name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn set_field_named(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.apply(FormEvent::change(name, value)?);
        Ok(())
    }

    /// Blurs a field identified by its form name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn blur_field_named(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.apply(FormEvent::blur(name, value)?);
        Ok(())
    }

    /// Applies a field interaction.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Change { field, value } => self.set_field(field, value),
            FormEvent::Blur { field, value } => self.blur_field(field, &value),
        }
    }

    /// Validates a single value against the rules for `field`.
    ///
    /// # Errors
    ///
    /// Returns the `FieldError` describing why the value is not acceptable.
    pub fn validate_field(&self, field: Field, value: &str) -> Result<(), FieldError> {
        validate_field(field, value, self.clock.today())
    }

    /// Validates every required field of the current draft.
    #[must_use]
    pub fn validate_all(&self) -> FieldErrorMap {
        validate_booking(&self.draft, self.clock.today())
            .into_iter()
            .collect()
    }

    /// Returns whether every required field currently passes validation,
    /// whether or not it has been touched.
    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        is_booking_valid(&self.draft, self.clock.today())
    }

    /// Returns whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_form_valid()
    }

    /// Returns whether the time select is enabled: a date must be chosen first.
    #[must_use]
    pub fn is_time_selectable(&self) -> bool {
        !self.draft.date.is_empty()
    }

    /// Returns the error to display for `field`: only touched fields show
    /// their errors.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Returns the form-level submission error, if the last attempt failed.
    #[must_use]
    pub const fn submit_error(&self) -> Option<SubmitError> {
        self.errors.submit_error()
    }

    /// Attempts to submit the booking.
    ///
    /// Every field is marked touched and validated. A valid draft is copied
    /// to `submission`; once accepted, the draft is handed to
    /// `confirmation` and the form session is over. A refused booking
    /// leaves the form editable with a form-level error.
    pub fn submit<S, F>(&mut self, submission: &mut S, confirmation: &mut F) -> SubmitOutcome
    where
        S: Submission + ?Sized,
        F: Confirmation + ?Sized,
    {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        self.touched.touch_all();
        self.errors = self.validate_all();
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        self.submitting = true;
        if submission.submit(self.draft.clone()) {
            confirmation.confirm(self.draft.clone());
            return SubmitOutcome::Confirmed;
        }

        self.submitting = false;
        self.errors = FieldErrorMap::from_submit_error(SubmitError::Rejected);
        SubmitOutcome::Rejected
    }
}
