//! Tests for Wizard::submit.
//!
//! Verifies that submission re-validates every data-bearing step, sends the typed
//! record to the backend, resets the record only on success, and refuses a second
//! submission while one is in flight.

use netroster::{
    api::Backend,
    console::{
        form::{InternetUserForm, UserField},
        wizard::{StepForm, Wizard},
    },
    error::{ApiError, Error, FormError},
    model::user::{InternetUser, NewInternetUser, UserStatus, ViolationLevel},
};
use netroster_test_utils::prelude::*;

async fn create(backend: &MockBackend, draft: NewInternetUser) -> Result<InternetUser, ApiError> {
    backend.create::<InternetUser>(&draft).await
}

fn at_review(form: InternetUserForm) -> Wizard<InternetUserForm> {
    let mut wizard = Wizard::with_form(form);
    while !wizard.is_last_step() {
        wizard.next().unwrap();
    }
    wizard
}

/// Tests a successful submission.
///
/// Expected: user created on the backend, record reset to defaults, step 0
#[tokio::test]
async fn creates_user_and_resets() -> Result<(), TestError> {
    let backend = TestBuilder::new().build();
    let mut wizard = at_review(mock_user_form());

    let created = wizard
        .submit(|draft| create(&backend, draft))
        .await?;

    assert_eq!(created.username, "ali01");
    assert_eq!(created.status, UserStatus::Active);
    assert_eq!(created.violations, ViolationLevel::None);
    assert_eq!(backend.records::<InternetUser>().len(), 1);

    assert_eq!(wizard.step(), 0);
    assert_eq!(wizard.form(), &InternetUserForm::default());
    assert_eq!(wizard.value(UserField::Status), "active");
    assert_eq!(wizard.value(UserField::Violations), "0");
    assert_eq!(wizard.value(UserField::Comment), "No Comment");
    assert_eq!(wizard.value(UserField::Name), "");
    assert!(!wizard.is_submitting());

    Ok(())
}

/// Tests the request body sent to the backend.
///
/// Expected: wire field names, typed status and violations
#[tokio::test]
async fn sends_wire_field_names() -> Result<(), TestError> {
    let backend = TestBuilder::new().build();
    let mut wizard = at_review(mock_user_form());

    wizard
        .submit(|draft| create(&backend, draft))
        .await?;

    let posts = backend.requests_with(Method::Post);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "internet_users");
    let body = posts[0].body.as_ref().unwrap();
    assert_eq!(body["deputyMinistry"], "1");
    assert_eq!(body["status"], "active");
    assert_eq!(body["violations"], "0");

    Ok(())
}

/// Tests that a backend failure keeps the record for a retry.
///
/// Expected: Err(ApiError), record and step unchanged, not submitting
#[tokio::test]
async fn keeps_record_on_backend_failure() {
    let backend = TestBuilder::new()
        .failing(Method::Post, "internet_users", server_error())
        .build();
    let mut wizard = at_review(mock_user_form());

    let result = wizard
        .submit(|draft| create(&backend, draft))
        .await;

    assert!(matches!(result, Err(Error::ApiError(ApiError::Status { status: 500, .. }))));
    assert_eq!(wizard.form(), &mock_user_form());
    assert_eq!(wizard.step(), 4);
    assert!(!wizard.is_submitting());
}

/// Tests that an incomplete data step sends the wizard back to it.
///
/// Expected: Err(MissingFields), step jumps to 2, no request issued
#[tokio::test]
async fn jumps_back_to_invalid_step() {
    let backend = TestBuilder::new().build();
    let mut wizard = at_review(mock_user_form());
    wizard.set(UserField::DeviceType, " ");

    let result = wizard
        .submit(|draft| create(&backend, draft))
        .await;

    assert!(matches!(
        result,
        Err(Error::FormError(FormError::MissingFields { step: 2, .. }))
    ));
    assert_eq!(wizard.step(), 2);
    assert!(backend.requests().is_empty());
}

/// Tests that a value failing typed conversion points at its step.
///
/// Expected: Err(InvalidValue) for device_limit, step 2
#[test]
fn rejects_non_numeric_device_limit() {
    let mut form = mock_user_form();
    form.device_limit = "many".to_string();
    let mut wizard = at_review(form);

    let result = wizard.begin_submit();

    assert!(matches!(
        result,
        Err(FormError::InvalidValue { field: "device_limit", .. })
    ));
    assert_eq!(wizard.step(), 2);
    assert!(!wizard.is_submitting());
}

/// Tests that only one submission may be in flight.
///
/// Expected: second begin_submit fails with SubmitInFlight until settled
#[test]
fn refuses_concurrent_submission() {
    let mut wizard = at_review(mock_user_form());

    assert!(wizard.begin_submit().is_ok());
    assert!(wizard.is_submitting());
    assert_eq!(wizard.begin_submit(), Err(FormError::SubmitInFlight));

    wizard.finish_submit::<(), ApiError>(&Err(ApiError::Network("offline".to_string())));
    assert!(!wizard.is_submitting());
    assert!(wizard.begin_submit().is_ok());
}

/// Tests the default record.
///
/// Expected: documented defaults, last data step is the activation step
#[test]
fn defaults_match_documented_values() {
    let form = InternetUserForm::default();

    assert_eq!(form.status, "active");
    assert_eq!(form.violations, "0");
    assert_eq!(form.comment, "No Comment");
    assert!(form.name.is_empty() && form.username.is_empty() && form.device_limit.is_empty());
    assert_eq!(InternetUserForm::last_data_step(), 3);
}
