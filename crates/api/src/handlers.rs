// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-level entry points.
//!
//! Each handler runs a request through the same form a guest fills in, so
//! the rules applied are identical.

use crate::app::BookingApp;
use crate::confirmation::{ConfirmationDetails, ConfirmationHandoff};
use crate::error::ApiError;
use crate::mock_api::{MockBookingApi, fetch_api};
use crate::request_response::{AvailabilityResponse, BookingRequest};
use little_lemon::{Clock, SubmitError};
use little_lemon_domain::{format_iso_date, parse_iso_date};
use time::Date;
use tracing::info;

/// Lists the slots open on `date`, or today when no date is given.
///
/// # Errors
///
/// Returns an error if `date` is not a `YYYY-MM-DD` calendar date.
pub fn check_availability<C: Clock>(
    date: Option<&str>,
    clock: &C,
) -> Result<AvailabilityResponse, ApiError> {
    let date: Date = match date {
        Some(value) => parse_iso_date(value)?,
        None => clock.today(),
    };

    Ok(AvailabilityResponse::new(
        format_iso_date(date),
        &fetch_api(date),
    ))
}

/// Books a table through the reservation form.
///
/// # Errors
///
/// Returns an error if any field fails validation or the booking service
/// refuses the reservation.
pub fn book<C: Clock>(request: &BookingRequest, clock: C) -> Result<ConfirmationDetails, ApiError> {
    book_with_api(request, clock, MockBookingApi::new())
}

/// Books a table through the reservation form against `api`.
///
/// # Errors
///
/// Returns an error if any field fails validation or `api` refuses the
/// reservation.
pub fn book_with_api<C: Clock>(
    request: &BookingRequest,
    clock: C,
    api: MockBookingApi,
) -> Result<ConfirmationDetails, ApiError> {
    let mut app: BookingApp<C> = BookingApp::with_api(clock, api);
    app.fill(&request.to_draft());
    app.submit()?;

    let handoff: &ConfirmationHandoff = app.handoff().ok_or_else(|| ApiError::SubmissionRejected {
        message: SubmitError::Rejected.to_string(),
    })?;
    let details: ConfirmationDetails = ConfirmationDetails::from_booking(handoff.booking())?;

    info!(
        date = %details.date,
        time = %details.time,
        guests = %details.guests,
        "Booked table"
    );
    Ok(details)
}
