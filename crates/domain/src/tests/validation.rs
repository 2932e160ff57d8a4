// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingDraft, Field, FieldError, is_booking_valid, is_valid_email, is_valid_phone,
    validate_booking, validate_field,
};
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 19);

fn complete_draft() -> BookingDraft {
    BookingDraft {
        date: String::from("2026-10-20"),
        time: String::from("17:00"),
        guests: String::from("2"),
        occasion: String::from("birthday"),
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::from("(312) 555-1234"),
        special_requests: String::new(),
    }
}

#[test]
fn test_date_rules() {
    assert_eq!(
        validate_field(Field::Date, "", TODAY),
        Err(FieldError::DateRequired)
    );
    assert_eq!(
        validate_field(Field::Date, "2026-10-18", TODAY),
        Err(FieldError::DateInPast)
    );
    assert_eq!(
        validate_field(Field::Date, "2025-12-31", TODAY),
        Err(FieldError::DateInPast)
    );
    assert_eq!(
        validate_field(Field::Date, "2026-31-10", TODAY),
        Err(FieldError::InvalidDate)
    );
    assert_eq!(validate_field(Field::Date, "2026-10-19", TODAY), Ok(()));
    assert_eq!(validate_field(Field::Date, "2027-01-05", TODAY), Ok(()));
}

#[test]
fn test_time_rules() {
    assert_eq!(
        validate_field(Field::Time, "", TODAY),
        Err(FieldError::TimeRequired)
    );
    assert_eq!(validate_field(Field::Time, "17:00", TODAY), Ok(()));
    // Presence is all that is checked.
    assert_eq!(validate_field(Field::Time, "12:15", TODAY), Ok(()));
}

#[test]
fn test_guest_rules() {
    assert_eq!(
        validate_field(Field::Guests, "", TODAY),
        Err(FieldError::GuestsRequired)
    );
    assert_eq!(
        validate_field(Field::Guests, "lots", TODAY),
        Err(FieldError::GuestsRequired)
    );
    assert_eq!(
        validate_field(Field::Guests, "0", TODAY),
        Err(FieldError::TooFewGuests)
    );
    assert_eq!(
        validate_field(Field::Guests, "-2", TODAY),
        Err(FieldError::TooFewGuests)
    );
    assert_eq!(
        validate_field(Field::Guests, "15", TODAY),
        Err(FieldError::TooManyGuests)
    );
    assert_eq!(
        validate_field(Field::Guests, "11", TODAY),
        Err(FieldError::TooManyGuests)
    );
    assert_eq!(validate_field(Field::Guests, "1", TODAY), Ok(()));
    assert_eq!(validate_field(Field::Guests, "2", TODAY), Ok(()));
    assert_eq!(validate_field(Field::Guests, "10", TODAY), Ok(()));
}

#[test]
fn test_fractional_guest_counts_are_compared_numerically() {
    assert_eq!(
        validate_field(Field::Guests, "0.5", TODAY),
        Err(FieldError::TooFewGuests)
    );
    assert_eq!(
        validate_field(Field::Guests, "15.5", TODAY),
        Err(FieldError::TooManyGuests)
    );
    assert_eq!(
        validate_field(Field::Guests, "10.5", TODAY),
        Err(FieldError::TooManyGuests)
    );
    assert_eq!(validate_field(Field::Guests, "2.5", TODAY), Ok(()));
    assert_eq!(validate_field(Field::Guests, " 3 ", TODAY), Ok(()));
}

#[test]
fn test_non_numeric_guest_counts_are_missing() {
    for value in ["", "   ", "two", "NaN", "inf"] {
        assert_eq!(
            validate_field(Field::Guests, value, TODAY),
            Err(FieldError::GuestsRequired),
            "value {value:?}"
        );
    }
}

#[test]
fn test_name_length_counts_characters() {
    assert_eq!(
        validate_field(Field::Name, "𝒜", TODAY),
        Err(FieldError::NameTooShort)
    );
    assert_eq!(validate_field(Field::Name, "𝒜𝒞", TODAY), Ok(()));
}

#[test]
fn test_occasion_rules() {
    assert_eq!(
        validate_field(Field::Occasion, "", TODAY),
        Err(FieldError::OccasionRequired)
    );
    assert_eq!(validate_field(Field::Occasion, "business", TODAY), Ok(()));
}

#[test]
fn test_name_rules() {
    assert_eq!(
        validate_field(Field::Name, "", TODAY),
        Err(FieldError::NameRequired)
    );
    assert_eq!(
        validate_field(Field::Name, "A", TODAY),
        Err(FieldError::NameTooShort)
    );
    assert_eq!(validate_field(Field::Name, "Al", TODAY), Ok(()));
    // Length counts characters, not bytes.
    assert_eq!(
        validate_field(Field::Name, "É", TODAY),
        Err(FieldError::NameTooShort)
    );
    assert_eq!(validate_field(Field::Name, "Zoë", TODAY), Ok(()));
}

#[test]
fn test_email_rules() {
    assert_eq!(
        validate_field(Field::Email, "", TODAY),
        Err(FieldError::EmailRequired)
    );
    assert_eq!(
        validate_field(Field::Email, "invalid-email", TODAY),
        Err(FieldError::InvalidEmail)
    );
    assert_eq!(validate_field(Field::Email, "test@example.com", TODAY), Ok(()));
}

#[test]
fn test_phone_rules() {
    assert_eq!(
        validate_field(Field::Phone, "", TODAY),
        Err(FieldError::PhoneRequired)
    );
    assert_eq!(
        validate_field(Field::Phone, "123", TODAY),
        Err(FieldError::InvalidPhone)
    );
    assert_eq!(
        validate_field(Field::Phone, "(312) 555-1234", TODAY),
        Ok(())
    );
}

#[test]
fn test_special_requests_never_fail() {
    assert_eq!(validate_field(Field::SpecialRequests, "", TODAY), Ok(()));
    assert_eq!(
        validate_field(Field::SpecialRequests, "Gluten free please", TODAY),
        Ok(())
    );
}

#[test]
fn test_is_valid_email_patterns() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(is_valid_email("x@y.z.w"));

    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

#[test]
fn test_is_valid_phone_patterns() {
    assert!(is_valid_phone("3125551234"));
    assert!(is_valid_phone("+1 (312) 555-1234"));
    assert!(is_valid_phone("312-555-1234"));
    assert!(is_valid_phone("          "));

    assert!(!is_valid_phone("555-1234"));
    assert!(!is_valid_phone("312.555.1234"));
    assert!(!is_valid_phone("call 3125551234"));
}

#[test]
fn test_validate_booking_reports_every_required_field_in_order() {
    let draft: BookingDraft = BookingDraft {
        guests: String::new(),
        ..BookingDraft::default()
    };
    let errors: Vec<(Field, FieldError)> = validate_booking(&draft, TODAY);
    assert_eq!(
        errors,
        vec![
            (Field::Date, FieldError::DateRequired),
            (Field::Time, FieldError::TimeRequired),
            (Field::Guests, FieldError::GuestsRequired),
            (Field::Occasion, FieldError::OccasionRequired),
            (Field::Name, FieldError::NameRequired),
            (Field::Email, FieldError::EmailRequired),
            (Field::Phone, FieldError::PhoneRequired),
        ]
    );
}

#[test]
fn test_validate_booking_accepts_complete_draft() {
    let draft: BookingDraft = complete_draft();
    assert!(validate_booking(&draft, TODAY).is_empty());
    assert!(is_booking_valid(&draft, TODAY));
}

#[test]
fn test_is_booking_valid_ignores_special_requests() {
    let mut draft: BookingDraft = complete_draft();
    draft.special_requests = String::from("Anything at all");
    assert!(is_booking_valid(&draft, TODAY));
}

#[test]
fn test_is_booking_valid_rejects_single_bad_field() {
    let mut draft: BookingDraft = complete_draft();
    draft.email = String::from("jane.example.com");
    assert!(!is_booking_valid(&draft, TODAY));
    assert_eq!(
        validate_booking(&draft, TODAY),
        vec![(Field::Email, FieldError::InvalidEmail)]
    );
}
