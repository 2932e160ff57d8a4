// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    RecordingConfirmation, RecordingSubmission, TOMORROW, TestForm, create_test_form,
    fill_valid_booking,
};
use crate::{FieldErrorMap, SUBMIT_ERROR_KEY, SubmitError, SubmitOutcome};
use little_lemon_domain::{BookingDraft, Field, FieldError, generate_slots};
use std::collections::BTreeMap;

#[test]
fn test_submit_empty_form_reports_every_required_field() {
    let mut form: TestForm = create_test_form();
    let mut submission: RecordingSubmission = RecordingSubmission::accepting();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    let outcome: SubmitOutcome = form.submit(&mut submission, &mut confirmation);

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 6);
    assert_eq!(&errors, form.errors());
    assert!(submission.received.is_empty());
    assert!(confirmation.shown.is_empty());
    assert!(!form.is_submitting());
}

#[test]
fn test_submit_touches_every_field() {
    let mut form: TestForm = create_test_form();
    let mut submission: RecordingSubmission = RecordingSubmission::accepting();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    let _ = form.submit(&mut submission, &mut confirmation);

    for field in Field::ALL {
        assert!(form.touched().contains(field), "{field} not touched");
    }
    assert_eq!(form.visible_error(Field::Date), Some(FieldError::DateRequired));
    assert_eq!(form.visible_error(Field::Phone), Some(FieldError::PhoneRequired));
    assert_eq!(form.visible_error(Field::Guests), None);
}

#[test]
fn test_submit_valid_form_calls_submission_once_with_snapshot() {
    let mut form: TestForm = create_test_form();
    fill_valid_booking(&mut form);
    form.set_field(Field::SpecialRequests, "Quiet table");
    let expected: BookingDraft = form.draft().clone();
    let mut submission: RecordingSubmission = RecordingSubmission::accepting();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    let outcome: SubmitOutcome = form.submit(&mut submission, &mut confirmation);

    assert_eq!(outcome, SubmitOutcome::Confirmed);
    assert!(outcome.is_confirmed());
    assert_eq!(submission.received, vec![expected.clone()]);
    assert_eq!(confirmation.shown, vec![expected]);
    assert!(form.errors().is_empty());
    assert_eq!(form.submit_error(), None);
}

#[test]
fn test_confirmed_form_ignores_further_submits() {
    let mut form: TestForm = create_test_form();
    fill_valid_booking(&mut form);
    let mut submission: RecordingSubmission = RecordingSubmission::accepting();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    assert_eq!(
        form.submit(&mut submission, &mut confirmation),
        SubmitOutcome::Confirmed
    );
    assert!(form.is_submitting());
    assert!(!form.can_submit());

    assert_eq!(
        form.submit(&mut submission, &mut confirmation),
        SubmitOutcome::InFlight
    );
    assert_eq!(submission.received.len(), 1);
    assert_eq!(confirmation.shown.len(), 1);
}

#[test]
fn test_refused_submission_sets_submit_error_and_allows_retry() {
    let mut form: TestForm = create_test_form();
    fill_valid_booking(&mut form);
    let mut refusing: RecordingSubmission = RecordingSubmission::refusing();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    let outcome: SubmitOutcome = form.submit(&mut refusing, &mut confirmation);

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(!form.is_submitting());
    assert!(form.can_submit());
    assert_eq!(form.submit_error(), Some(SubmitError::Rejected));
    let messages: BTreeMap<String, String> = form.errors().messages();
    assert_eq!(
        messages.get(SUBMIT_ERROR_KEY).map(String::as_str),
        Some("Failed to submit reservation. Please try again.")
    );
    assert!(confirmation.shown.is_empty());
    assert_eq!(refusing.received.len(), 1);

    let mut accepting: RecordingSubmission = RecordingSubmission::accepting();
    let retry: SubmitOutcome = form.submit(&mut accepting, &mut confirmation);

    assert_eq!(retry, SubmitOutcome::Confirmed);
    assert_eq!(form.submit_error(), None);
    assert_eq!(confirmation.shown.len(), 1);
}

#[test]
fn test_refused_submission_keeps_draft_for_editing() {
    let mut form: TestForm = create_test_form();
    fill_valid_booking(&mut form);
    let before: BookingDraft = form.draft().clone();
    let mut refusing: RecordingSubmission = RecordingSubmission::refusing();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();

    let _ = form.submit(&mut refusing, &mut confirmation);

    assert_eq!(form.draft(), &before);
    form.set_field(Field::Guests, "3");
    assert_eq!(form.draft().guests, "3");
}

#[test]
fn test_submit_accepts_closure_collaborators() {
    let mut form: TestForm = create_test_form();
    fill_valid_booking(&mut form);
    let mut submitted: Vec<BookingDraft> = Vec::new();
    let mut confirmed_names: Vec<String> = Vec::new();

    let outcome: SubmitOutcome = form.submit(
        &mut |booking: BookingDraft| {
            submitted.push(booking);
            true
        },
        &mut |booking: BookingDraft| confirmed_names.push(booking.name),
    );

    assert_eq!(outcome, SubmitOutcome::Confirmed);
    assert_eq!(submitted.len(), 1);
    assert_eq!(confirmed_names, vec![String::from("Jane Doe")]);
}

#[test]
fn test_end_to_end_booking_for_tomorrow() {
    let mut form: TestForm = create_test_form();
    let first_slot: String = generate_slots(TOMORROW).first().to_string();

    form.set_field(Field::Date, "2026-10-20");
    form.set_field(Field::Time, first_slot.clone());
    form.set_field(Field::Guests, "2");
    form.set_field(Field::Occasion, "birthday");
    form.set_field(Field::Name, "Jane Doe");
    form.set_field(Field::Email, "jane@example.com");
    form.set_field(Field::Phone, "(312) 555-1234");

    assert!(form.is_form_valid());
    assert_eq!(form.validate_all(), FieldErrorMap::new());

    let mut submission: RecordingSubmission = RecordingSubmission::accepting();
    let mut confirmation: RecordingConfirmation = RecordingConfirmation::default();
    assert!(form.submit(&mut submission, &mut confirmation).is_confirmed());
    assert_eq!(confirmation.shown[0].time, first_slot);
    assert_eq!(confirmation.shown[0].time, "17:00");
}
