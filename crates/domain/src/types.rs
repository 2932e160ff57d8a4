// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::TimeSlot;
use crate::dates::parse_iso_date;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Number of guests pre-filled on a fresh reservation form.
pub const DEFAULT_GUESTS: u8 = 2;

/// A field of the reservation form.
///
/// Field order matches the order in which the form presents them, which is
/// also the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Reservation date (`YYYY-MM-DD`).
    Date,
    /// Reservation time slot (`H:MM`).
    Time,
    /// Party size.
    Guests,
    /// Occasion being celebrated.
    Occasion,
    /// Full name of the guest making the reservation.
    Name,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Free-text requests. Never validated.
    SpecialRequests,
}

impl Field {
    /// Every form field, in presentation order.
    pub const ALL: [Self; 8] = [
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::Occasion,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::SpecialRequests,
    ];

    /// The fields that must pass validation before a booking can be submitted.
    pub const REQUIRED: [Self; 7] = [
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::Occasion,
        Self::Name,
        Self::Email,
        Self::Phone,
    ];

    /// Returns the form name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::Occasion => "occasion",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::SpecialRequests => "specialRequests",
        }
    }

    /// Returns whether the field takes part in validation.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::SpecialRequests)
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "guests" => Ok(Self::Guests),
            "occasion" => Ok(Self::Occasion),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "specialRequests" | "special_requests" => Ok(Self::SpecialRequests),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The occasion a reservation is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    /// A birthday celebration.
    Birthday,
    /// An anniversary.
    Anniversary,
    /// An engagement.
    Engagement,
    /// A business meal.
    Business,
    /// Anything else.
    Other,
}

impl Occasion {
    /// Every selectable occasion, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Birthday,
        Self::Anniversary,
        Self::Engagement,
        Self::Business,
        Self::Other,
    ];

    /// Returns the form value of this occasion.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::Engagement => "engagement",
            Self::Business => "business",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label shown in menus and confirmations.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
            Self::Engagement => "Engagement",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Occasion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birthday" => Ok(Self::Birthday),
            "anniversary" => Ok(Self::Anniversary),
            "engagement" => Ok(Self::Engagement),
            "business" => Ok(Self::Business),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidOccasion(s.to_string())),
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The in-progress, not-yet-submitted reservation record.
///
/// Values are held exactly as entered into the form. Typed views are
/// available through the accessor methods; each returns `None` when the
/// raw value does not describe a usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Reservation date as `YYYY-MM-DD`, or empty.
    pub date: String,
    /// Selected time slot as `H:MM`, or empty.
    pub time: String,
    /// Party size as entered.
    pub guests: String,
    /// Occasion form value, or empty.
    pub occasion: String,
    /// Guest name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional free text.
    #[serde(default)]
    pub special_requests: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            occasion: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
        }
    }
}

impl BookingDraft {
    /// Returns the raw value currently held for `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Guests => &self.guests,
            Field::Occasion => &self.occasion,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::SpecialRequests => &self.special_requests,
        }
    }

    /// Replaces the raw value held for `field`.
    pub fn set_value(&mut self, field: Field, value: String) {
        let slot: &mut String = match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Guests => &mut self.guests,
            Field::Occasion => &mut self.occasion,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::SpecialRequests => &mut self.special_requests,
        };
        *slot = value;
    }

    /// The reservation date, if one is set and well formed.
    #[must_use]
    pub fn reservation_date(&self) -> Option<Date> {
        parse_iso_date(&self.date).ok()
    }

    /// The selected time slot, if one is set and well formed.
    #[must_use]
    pub fn time_slot(&self) -> Option<TimeSlot> {
        self.time.parse().ok()
    }

    /// The party size, if the entered value is a finite number.
    #[must_use]
    pub fn guest_count(&self) -> Option<f64> {
        parse_guest_number(&self.guests)
    }

    /// The selected occasion, if one is set.
    #[must_use]
    pub fn occasion_kind(&self) -> Option<Occasion> {
        self.occasion.parse().ok()
    }

    /// The special requests, or `None` when left blank.
    #[must_use]
    pub fn special_requests_text(&self) -> Option<&str> {
        let trimmed: &str = self.special_requests.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Interprets a guest count as the number a number input holds.
///
/// Surrounding whitespace is ignored and fractions are kept. Text that is
/// not a finite number yields `None`, matching a number input that reports
/// no value.
#[must_use]
pub fn parse_guest_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
