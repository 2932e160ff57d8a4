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

mod app;
mod confirmation;
mod error;
mod handlers;
mod mock_api;
mod request_response;

#[cfg(test)]
mod tests;

pub use app::{BookingApp, BookingForm, FetchTimes};
pub use confirmation::{
    BOOKING_ROUTE, ConfirmationDetails, ConfirmationHandoff, ConfirmationView, HandoffSlot,
    RESTAURANT_PHONE, format_long_date, format_party_size,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{book, book_with_api, check_availability};
pub use mock_api::{MockBookingApi, fetch_api, submit_api};
pub use request_response::{
    AvailabilityResponse, BookingRequest, CONFIRMED_TITLE, ConfirmationResponse,
    ValidationErrorResponse,
};
