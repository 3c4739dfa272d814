//! Tests for Wizard::next.
//!
//! Verifies that forward navigation is gated on the current step's required fields
//! and that the cursor never runs past the review step.

use netroster::{
    console::{
        form::{InternetUserForm, UserField},
        wizard::Wizard,
    },
    error::FormError,
};
use netroster_test_utils::prelude::*;

/// Tests that a blank username blocks the first step.
///
/// Expected: Err with MissingFields naming `username`, step stays 0
#[test]
fn blocks_when_required_field_empty() {
    let mut wizard = Wizard::<InternetUserForm>::new();
    wizard.set(UserField::Name, "Ali");
    wizard.set(UserField::Username, "");

    let result = wizard.next();

    assert_eq!(
        result,
        Err(FormError::MissingFields {
            step: 0,
            fields: vec!["username"],
        })
    );
    assert_eq!(wizard.step(), 0);
}

/// Tests that filling the missing field lets the wizard advance.
///
/// Expected: Ok(1)
#[test]
fn advances_once_required_fields_filled() {
    let mut wizard = Wizard::<InternetUserForm>::new();
    wizard.set(UserField::Name, "Ali");
    assert!(wizard.next().is_err());

    wizard.set(UserField::Username, "ali01");

    assert_eq!(wizard.next(), Ok(1));
    assert_eq!(wizard.step(), 1);
}

/// Tests that whitespace-only values count as empty.
///
/// Expected: Err, step unchanged
#[test]
fn treats_whitespace_as_empty() {
    let mut wizard = Wizard::<InternetUserForm>::new();
    wizard.set(UserField::Name, "   ");
    wizard.set(UserField::Username, "\t");

    assert!(wizard.next().is_err());
    assert!(!wizard.validate_step(0));
    assert_eq!(wizard.step(), 0);
}

/// Tests the field-to-step mapping for every data-bearing step.
///
/// Expected: each step reports exactly its own required fields when blank
#[test]
fn reports_required_fields_per_step() {
    let mut form = mock_user_form();
    form.employment_type.clear();
    form.directorate.clear();
    form.deputy_ministry.clear();
    form.device_limit.clear();
    form.device_type.clear();
    form.status.clear();
    form.violations.clear();
    form.comment.clear();
    let wizard = Wizard::with_form(form);

    assert!(wizard.check_step(0).is_ok());
    assert_eq!(
        wizard.check_step(1),
        Err(FormError::MissingFields {
            step: 1,
            fields: vec!["employment_type", "directorate", "deputyMinistry"],
        })
    );
    assert_eq!(
        wizard.check_step(2),
        Err(FormError::MissingFields {
            step: 2,
            fields: vec!["device_limit", "device_type"],
        })
    );
    assert_eq!(
        wizard.check_step(3),
        Err(FormError::MissingFields {
            step: 3,
            fields: vec!["status", "violations", "comment"],
        })
    );
    assert!(wizard.validate_step(4));
}

/// Tests that advancing past the review step is clamped.
///
/// Expected: step stays at the last step
#[test]
fn never_moves_past_review_step() {
    let mut wizard = Wizard::with_form(mock_user_form());
    for _ in 0..10 {
        wizard.next().unwrap();
    }

    assert_eq!(wizard.step(), 4);
    assert!(wizard.is_last_step());
    assert_eq!(wizard.title(), "Review & Submit");
}
