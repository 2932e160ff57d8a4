// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking page owner.
//!
//! `BookingApp` wires the reservation form to the mock booking service
//! and keeps the confirmation handoff for the confirmation view.

use crate::confirmation::{ConfirmationHandoff, ConfirmationView, HandoffSlot};
use crate::error::ApiError;
use crate::mock_api::{MockBookingApi, fetch_api};
use little_lemon::{Clock, ReservationForm, SubmitError, SubmitOutcome};
use little_lemon_domain::{AvailableSlots, BookingDraft, Field, format_iso_date};
use time::Date;
use tracing::{debug, info, warn};

/// The availability lookup the booking page hands to its form.
pub type FetchTimes = fn(Date) -> AvailableSlots;

/// The reservation form as the booking page owns it.
pub type BookingForm<C> = ReservationForm<C, FetchTimes>;

/// Owns the booking page: the form, the booking service and the handoff
/// to the confirmation view.
#[derive(Debug, Clone)]
pub struct BookingApp<C> {
    form: BookingForm<C>,
    api: MockBookingApi,
    handoff: HandoffSlot,
}

impl<C: Clock> BookingApp<C> {
    /// Creates the booking page backed by an accepting booking service.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_api(clock, MockBookingApi::new())
    }

    /// Creates the booking page backed by `api`.
    #[must_use]
    pub fn with_api(clock: C, api: MockBookingApi) -> Self {
        let today: Date = clock.today();
        let available: AvailableSlots = fetch_api(today);
        debug!(today = %format_iso_date(today), "Initialized booking page");

        Self {
            form: ReservationForm::with_available_slots(clock, fetch_api as FetchTimes, available),
            api,
            handoff: HandoffSlot::new(),
        }
    }

    /// Returns the slots offered for today, as shown before a date is chosen.
    #[must_use]
    pub fn initialize_times(&self) -> AvailableSlots {
        fetch_api(self.form.today())
    }

    /// Chooses a reservation date and returns the slots now offered.
    pub fn update_times(&mut self, date: &str) -> &AvailableSlots {
        self.form.set_field(Field::Date, date);
        self.form.available_slots()
    }

    /// Returns the slots currently offered.
    #[must_use]
    pub const fn available_times(&self) -> &AvailableSlots {
        self.form.available_slots()
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &BookingForm<C> {
        &self.form
    }

    /// Returns the form for editing.
    pub const fn form_mut(&mut self) -> &mut BookingForm<C> {
        &mut self.form
    }

    /// Returns the booking service.
    #[must_use]
    pub const fn api(&self) -> &MockBookingApi {
        &self.api
    }

    /// Returns the booking service for reconfiguration.
    pub const fn api_mut(&mut self) -> &mut MockBookingApi {
        &mut self.api
    }

    /// Returns the booking handed to the confirmation view, if any.
    #[must_use]
    pub const fn handoff(&self) -> Option<&ConfirmationHandoff> {
        self.handoff.peek()
    }

    /// Applies a change to the field named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn change(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        self.form.set_field_named(name, value)?;
        Ok(())
    }

    /// Blurs the field named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a reservation form field.
    pub fn blur(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        self.form.blur_field_named(name, value)?;
        Ok(())
    }

    /// Enters every value of `draft` into the form, date first.
    pub fn fill(&mut self, draft: &BookingDraft) {
        for field in Field::ALL {
            self.form.set_field(field, draft.value(field));
        }
    }

    /// Submits the form to the booking service.
    ///
    /// An accepted booking is handed off to the confirmation view.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid, the service refuses the
    /// booking, or the booking was already submitted.
    pub fn submit(&mut self) -> Result<(), ApiError> {
        match self.form.submit(&mut self.api, &mut self.handoff) {
            SubmitOutcome::Confirmed => {
                info!(
                    date = %self.form.draft().date,
                    time = %self.form.draft().time,
                    "Reservation confirmed"
                );
                Ok(())
            }
            SubmitOutcome::Invalid(errors) => {
                warn!(fields = errors.len(), "Reservation form has errors");
                Err(ApiError::from(&errors))
            }
            SubmitOutcome::Rejected => {
                warn!("Reservation refused by the booking service");
                Err(ApiError::SubmissionRejected {
                    message: SubmitError::Rejected.to_string(),
                })
            }
            SubmitOutcome::InFlight => Err(ApiError::AlreadySubmitted),
        }
    }

    /// Resolves the confirmation view from the current handoff.
    #[must_use]
    pub fn confirmation_view(&self) -> ConfirmationView {
        ConfirmationView::resolve(self.handoff.peek())
    }
}
