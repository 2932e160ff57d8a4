// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mock table availability.
//!
//! Availability is simulated: a seeded linear-congruential stream decides,
//! half-hour by half-hour, which slots of the evening service are open.
//! The stream is seeded only by the day of the month, so the same day
//! number produces the same slots in every month.

use crate::dates::parse_iso_date;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// First hour of the evening service.
pub const FIRST_SEATING_HOUR: u8 = 17;

/// Last hour of the evening service.
pub const LAST_SEATING_HOUR: u8 = 23;

/// Slots offered when the generator opens nothing.
const FALLBACK_HOURS: [u8; 5] = [17, 18, 19, 20, 21];

/// Pseudo-random stream used to simulate availability.
///
/// `s(n+1) = s(n) * 185852 mod (2^35 - 31)`, yielding `s / m` in `[0, 1)`.
/// All arithmetic stays below `2^53`, so every value is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// The stream modulus, `2^35 - 31`.
    pub const MODULUS: u64 = (1 << 35) - 31;
    /// The stream multiplier.
    pub const MULTIPLIER: u64 = 185_852;

    /// Creates a stream from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Advances the stream and returns the next value in `[0, 1)`.
    #[allow(clippy::cast_precision_loss)] // both operands are below 2^35
    pub const fn next_value(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}

/// A bookable half-hour slot, displayed as `H:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Creates a slot on the hour or half hour within the evening service.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the hour is outside 17..=23
    /// or the minute is neither 0 nor 30.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if !(FIRST_SEATING_HOUR..=LAST_SEATING_HOUR).contains(&hour) || !matches!(minute, 0 | 30)
        {
            return Err(DomainError::InvalidTimeSlot(format!("{hour}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// The slot on the hour.
    const fn on_the_hour(hour: u8) -> Self {
        Self { hour, minute: 0 }
    }

    /// The slot on the half hour.
    const fn on_the_half_hour(hour: u8) -> Self {
        Self { hour, minute: 30 }
    }

    /// Returns the hour.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0 or 30).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTimeSlot(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2
            || hour.is_empty()
            || hour.len() > 2
            || !hour.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// The ordered, never-empty set of slots open on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeSlot>", into = "Vec<TimeSlot>")]
pub struct AvailableSlots {
    slots: Vec<TimeSlot>,
}

impl AvailableSlots {
    /// Builds a slot set, sorting and de-duplicating `slots`.
    ///
    /// An empty input yields the fallback slots.
    #[must_use]
    pub fn new(mut slots: Vec<TimeSlot>) -> Self {
        if slots.is_empty() {
            return Self::fallback();
        }
        slots.sort_unstable();
        slots.dedup();
        Self { slots }
    }

    /// The fixed slots offered when nothing else is available:
    /// 17:00, 18:00, 19:00, 20:00 and 21:00.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            slots: FALLBACK_HOURS
                .iter()
                .map(|hour| TimeSlot::on_the_hour(*hour))
                .collect(),
        }
    }

    /// Iterates over the slots in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }

    /// Returns the earliest slot.
    #[must_use]
    pub fn first(&self) -> TimeSlot {
        // Never empty: construction falls back to the fixed slots.
        self.slots
            .first()
            .copied()
            .unwrap_or(TimeSlot::on_the_hour(FIRST_SEATING_HOUR))
    }

    /// Returns the number of open slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether there are no open slots, which never holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns whether `time` (as `H:MM`) is one of the open slots.
    #[must_use]
    pub fn contains(&self, time: &str) -> bool {
        time.parse::<TimeSlot>()
            .is_ok_and(|slot| self.slots.binary_search(&slot).is_ok())
    }

    /// Returns the slots as `H:MM` strings.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.slots.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<TimeSlot>> for AvailableSlots {
    fn from(slots: Vec<TimeSlot>) -> Self {
        Self::new(slots)
    }
}

impl From<AvailableSlots> for Vec<TimeSlot> {
    fn from(slots: AvailableSlots) -> Self {
        slots.slots
    }
}

impl<'a> IntoIterator for &'a AvailableSlots {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Decides the open slots from a stream of draws.
///
/// For each hour of the service, one draw decides the `:00` slot and the
/// next decides the `:30` slot; a draw below one half opens the slot.
/// A stream that runs dry opens nothing further.
pub(crate) fn collect_slots<I>(draws: I) -> AvailableSlots
where
    I: IntoIterator<Item = f64>,
{
    let mut draws = draws.into_iter();
    let mut open: Vec<TimeSlot> = Vec::new();

    for hour in FIRST_SEATING_HOUR..=LAST_SEATING_HOUR {
        if draws.next().is_some_and(|draw| draw < 0.5) {
            open.push(TimeSlot::on_the_hour(hour));
        }
        if draws.next().is_some_and(|draw| draw < 0.5) {
            open.push(TimeSlot::on_the_half_hour(hour));
        }
    }

    AvailableSlots::new(open)
}

/// Generates the open slots for `date`.
///
/// Only the day of the month seeds the stream. This function is pure and
/// deterministic.
#[must_use]
pub fn generate_slots(date: Date) -> AvailableSlots {
    collect_slots(SeededRandom::new(u64::from(date.day())))
}

/// Generates the open slots for a `YYYY-MM-DD` date string.
///
/// A value that is not a calendar date yields the fallback slots.
#[must_use]
pub fn generate_slots_for_iso(date: &str) -> AvailableSlots {
    parse_iso_date(date).map_or_else(|_| AvailableSlots::fallback(), generate_slots)
}
