//! Tests for ListState delete handling.
//!
//! Verifies that deletion needs confirmation, removes the row only after the backend
//! accepted it, and leaves the list untouched when the backend rejects it.

use netroster::{
    console::list::ListState,
    error::ApiError,
    model::{id::RecordId, org::DeputyMinistry, user::InternetUser},
};
use netroster_test_utils::prelude::*;

fn listing() -> Vec<InternetUser> {
    vec![
        mock_internet_user("4", "Ali", "ali01", "555"),
        mock_internet_user("5", "Zee", "zee1", "777"),
    ]
}

/// Tests the confirmed deletion scenario.
///
/// Expected: Ok(true), record "5" removed locally and on the backend
#[tokio::test]
async fn removes_record_after_backend_success() -> Result<(), TestError> {
    let backend = TestBuilder::new().with_internet_users(listing()).build();
    let mut list = ListState::with_items(listing());
    let id = RecordId::from("5");

    list.request_delete(id.clone());
    let confirmed = list.confirm_delete();
    assert_eq!(confirmed.as_ref(), Some(&id));

    let deleted = list.delete(&backend, &id, confirmed.is_some()).await?;

    assert!(deleted);
    assert!(list.find(&id).is_none());
    assert_eq!(list.items().len(), 1);
    assert_eq!(backend.records::<InternetUser>().len(), 1);
    assert_eq!(backend.requests_with(Method::Delete)[0].path, "internet_users/5");

    Ok(())
}

/// Tests that a rejected deletion leaves the list unchanged.
///
/// Expected: Err surfaced, both records still listed
#[tokio::test]
async fn keeps_list_when_backend_rejects() {
    let backend = TestBuilder::new()
        .with_internet_users(listing())
        .failing(Method::Delete, "internet_users", server_error())
        .build();
    let mut list = ListState::with_items(listing());
    let id = RecordId::from("5");

    let result = list.delete(&backend, &id, true).await;

    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    assert_eq!(list.items(), listing().as_slice());
}

/// Tests that declining the confirmation issues no request.
///
/// Expected: Ok(false), no DELETE sent
#[tokio::test]
async fn declined_confirmation_sends_nothing() -> Result<(), TestError> {
    let backend = TestBuilder::new().with_internet_users(listing()).build();
    let mut list = ListState::with_items(listing());
    let id = RecordId::from("5");

    list.request_delete(id.clone());
    list.cancel_delete();
    assert!(list.pending_delete().is_none());

    let deleted = list.delete(&backend, &id, false).await?;

    assert!(!deleted);
    assert_eq!(list.items().len(), 2);
    assert!(backend.requests().is_empty());

    Ok(())
}

/// Tests deletion of a record the backend no longer has.
///
/// Expected: 404 surfaced, local list unchanged
#[tokio::test]
async fn missing_record_is_an_error() {
    let backend = TestBuilder::new()
        .with_deputy_ministries(vec![mock_deputy_ministry("1", "Finance")])
        .build();
    let mut list = ListState::with_items(vec![
        mock_deputy_ministry("1", "Finance"),
        mock_deputy_ministry("2", "Health"),
    ]);

    let result = list.delete(&backend, &RecordId::from("2"), true).await;

    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    assert_eq!(list.items().len(), 2);
    assert_eq!(backend.records::<DeputyMinistry>().len(), 1);
}
