//! Tests for ListState::update and create.

use netroster::{
    console::list::ListState,
    error::FormError,
    model::{
        id::RecordId,
        org::{DeputyMinistry, DeputyMinistryDraft},
        user::{InternetUser, InternetUserPatch, ViolationLevel},
    },
};
use netroster_test_utils::prelude::*;

/// Tests that an edit replaces the row with the backend's response.
///
/// Expected: only changed fields sent, row updated in place
#[tokio::test]
async fn replaces_row_with_server_response() -> Result<(), TestError> {
    let original = mock_internet_user("5", "Zee", "zee1", "777");
    let backend = TestBuilder::new()
        .with_internet_users(vec![original.clone()])
        .build();
    let mut list = ListState::with_items(vec![original.clone()]);

    let edited = InternetUser {
        violations: ViolationLevel::Warning,
        ..original.clone()
    };
    let patch = InternetUserPatch::diff(&original, &edited);
    patch.validate()?;

    list.update(&backend, &original.id, &patch).await?;

    let row = list.find(&RecordId::from("5")).unwrap();
    assert_eq!(row.violations, ViolationLevel::Warning);
    assert_eq!(row.name, "Zee");

    let puts = backend.requests_with(Method::Put);
    assert_eq!(puts[0].path, "internet_users/5");
    assert_eq!(puts[0].body, Some(serde_json::json!({ "violations": "1" })));

    Ok(())
}

/// Tests that an unchanged edit is rejected before any request.
///
/// Expected: Err(NothingToUpdate)
#[test]
fn unchanged_edit_is_rejected() {
    let original = mock_internet_user("5", "Zee", "zee1", "777");
    let patch = InternetUserPatch::diff(&original, &original);

    assert_eq!(patch.validate(), Err(FormError::NothingToUpdate));
}

/// Tests creating a deputy ministry.
///
/// Expected: new row appended with a backend-assigned id
#[tokio::test]
async fn appends_created_record() -> Result<(), TestError> {
    let backend = TestBuilder::new().build();
    let mut list = ListState::<DeputyMinistry>::new();

    list.create(&backend, &DeputyMinistryDraft::new("  Finance ")?)
        .await?;

    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].name, "Finance");
    assert!(!list.items()[0].id.is_empty());

    Ok(())
}

/// Tests that blank names never reach the backend.
///
/// Expected: Err(InvalidValue)
#[test]
fn blank_ministry_name_is_rejected() {
    assert!(matches!(
        DeputyMinistryDraft::new("   "),
        Err(FormError::InvalidValue { field: "name", .. })
    ));
}
