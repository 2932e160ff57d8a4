// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handing an accepted booking to the confirmation view.
//!
//! The booking travels in an explicit `ConfirmationHandoff`. The view
//! refuses to render without one and redirects to the booking page
//! instead.

use little_lemon::Confirmation;
use little_lemon_domain::{BookingDraft, DomainError, Occasion, format_iso_date, parse_iso_date};
use serde::Serialize;
use time::Date;
use tracing::{debug, warn};

/// The booking entry point the confirmation view redirects to.
pub const BOOKING_ROUTE: &str = "/booking";

/// The restaurant's phone number for changes to a reservation.
pub const RESTAURANT_PHONE: &str = "(312) 555-1234";

/// An accepted booking on its way to the confirmation view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationHandoff {
    booking: BookingDraft,
}

impl ConfirmationHandoff {
    /// Wraps an accepted booking.
    #[must_use]
    pub const fn new(booking: BookingDraft) -> Self {
        Self { booking }
    }

    /// Returns the accepted booking.
    #[must_use]
    pub const fn booking(&self) -> &BookingDraft {
        &self.booking
    }

    /// Consumes the handoff, returning the booking.
    #[must_use]
    pub fn into_booking(self) -> BookingDraft {
        self.booking
    }
}

/// A confirmation collaborator that holds the handoff for the next view.
#[derive(Debug, Clone, Default)]
pub struct HandoffSlot {
    handoff: Option<ConfirmationHandoff>,
}

impl HandoffSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { handoff: None }
    }

    /// Returns the pending handoff without removing it.
    #[must_use]
    pub const fn peek(&self) -> Option<&ConfirmationHandoff> {
        self.handoff.as_ref()
    }

    /// Removes and returns the pending handoff.
    pub const fn take(&mut self) -> Option<ConfirmationHandoff> {
        self.handoff.take()
    }
}

impl Confirmation for HandoffSlot {
    fn confirm(&mut self, booking: BookingDraft) {
        self.handoff = Some(ConfirmationHandoff::new(booking));
    }
}

/// Formats a date the way the confirmation page shows it,
/// e.g. "Tuesday, October 20, 2026".
#[must_use]
pub fn format_long_date(date: Date) -> String {
    format!(
        "{}, {} {}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    )
}

/// Formats a party size as entered, e.g. "1 guest" or "4 guests".
#[must_use]
pub fn format_party_size(guests: &str) -> String {
    if guests == "1" {
        String::from("1 guest")
    } else {
        format!("{guests} guests")
    }
}

/// Read-only presentation of an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDetails {
    /// Reservation date as `YYYY-MM-DD`.
    pub date: String,
    /// Reservation date in long form.
    pub formatted_date: String,
    /// Reserved time slot.
    pub time: String,
    /// Party size as entered.
    pub guests: String,
    /// Party size in words.
    pub party_size: String,
    /// Occasion.
    pub occasion: Occasion,
    /// Occasion label.
    pub occasion_label: String,
    /// Guest name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Special requests, when any were made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl ConfirmationDetails {
    /// Builds the presentation of `booking`.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking lacks a usable date, time, party
    /// size or occasion. A booking that passed form validation always
    /// has them.
    pub fn from_booking(booking: &BookingDraft) -> Result<Self, DomainError> {
        let date: Date = parse_iso_date(&booking.date)?;
        if booking.time.is_empty() {
            return Err(DomainError::MissingValue { field: "time" });
        }
        if booking.guest_count().is_none() {
            return Err(DomainError::InvalidGuestCount(booking.guests.clone()));
        }
        let guests: &str = booking.guests.trim();
        let occasion: Occasion = booking.occasion.parse()?;

        Ok(Self {
            date: format_iso_date(date),
            formatted_date: format_long_date(date),
            time: booking.time.clone(),
            guests: guests.to_string(),
            party_size: format_party_size(guests),
            occasion,
            occasion_label: occasion.label().to_string(),
            name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            special_requests: booking.special_requests_text().map(str::to_string),
        })
    }

    /// The greeting shown above the details.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "Thank you for your reservation, {}! We're looking forward to serving you.",
            self.name
        )
    }

    /// The labelled detail rows, in display order.
    #[must_use]
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows: Vec<(&'static str, String)> = vec![
            ("Date", self.formatted_date.clone()),
            ("Time", self.time.clone()),
            ("Party Size", self.party_size.clone()),
            ("Occasion", self.occasion_label.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
        ];
        if let Some(requests) = &self.special_requests {
            rows.push(("Special Requests", requests.clone()));
        }
        rows
    }

    /// The closing note about the confirmation email.
    #[must_use]
    pub fn follow_up(&self) -> String {
        format!(
            "A confirmation email has been sent to {}. If you need to make any changes, please call us at {RESTAURANT_PHONE}.",
            self.email
        )
    }
}

/// What the confirmation route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationView {
    /// No booking was handed off; go back to the booking page.
    Redirect {
        /// The route to redirect to.
        to: &'static str,
    },
    /// The accepted booking.
    Confirmed(Box<ConfirmationDetails>),
}

impl ConfirmationView {
    /// Resolves the view for an optional handoff.
    ///
    /// Without a handoff, or with one that cannot be presented, the view
    /// redirects to the booking page rather than show incomplete data.
    #[must_use]
    pub fn resolve(handoff: Option<&ConfirmationHandoff>) -> Self {
        let Some(handoff) = handoff else {
            debug!("No booking handed off; redirecting to {BOOKING_ROUTE}");
            return Self::redirect();
        };

        match ConfirmationDetails::from_booking(handoff.booking()) {
            Ok(details) => Self::Confirmed(Box::new(details)),
            Err(err) => {
                warn!(%err, "Handed-off booking is incomplete; redirecting to {BOOKING_ROUTE}");
                Self::redirect()
            }
        }
    }

    /// The redirect-only view.
    #[must_use]
    pub const fn redirect() -> Self {
        Self::Redirect { to: BOOKING_ROUTE }
    }

    /// Returns whether this view is a redirect.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Returns the confirmed details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&ConfirmationDetails> {
        match self {
            Self::Confirmed(details) => Some(details.as_ref()),
            Self::Redirect { .. } => None,
        }
    }
}
