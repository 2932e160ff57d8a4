// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering command results as text or JSON.

use little_lemon_api::{AvailabilityResponse, ConfirmationResponse, ValidationErrorResponse};

/// Renders the open slots for a date.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_slots(
    response: &AvailabilityResponse,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(response);
    }

    let lines: Vec<String> = response.slots.iter().map(|slot| format!("  {slot}\n")).collect();
    Ok(format!("Available times on {}:\n{}", response.date, lines.concat()))
}

/// Renders a confirmed reservation.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_confirmation(
    response: &ConfirmationResponse,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(response);
    }

    let rows: Vec<String> = response
        .booking
        .detail_rows()
        .into_iter()
        .map(|(label, value)| format!("  {label}: {value}\n"))
        .collect();
    Ok(format!(
        "{}\n{}\n\n{}\n{}\n",
        response.title,
        response.message,
        rows.concat(),
        response.follow_up
    ))
}

/// Renders a reservation that was not accepted.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_failure(
    response: &ValidationErrorResponse,
    json: bool,
) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(response);
    }

    let errors: Vec<String> = response
        .errors
        .iter()
        .map(|(field, message)| format!("  {field}: {message}\n"))
        .collect();
    Ok(format!("{}\n{}", response.message, errors.concat()))
}
