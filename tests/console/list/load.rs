//! Tests for ListState::load.

use netroster::{
    console::list::ListState,
    error::ApiError,
    model::{
        org::Directorate,
        user::{InternetUser, UserStatus, ViolationLevel},
        violation::Violation,
    },
};
use netroster_test_utils::prelude::*;

/// Tests a successful fetch.
///
/// Expected: items replaced, no error, not loading
#[tokio::test]
async fn loads_collection() {
    let backend = TestBuilder::new()
        .with_directorates(vec![
            mock_directorate("10", "Budget", "1"),
            mock_directorate("11", "Audit", "1"),
        ])
        .build();
    let mut list = ListState::<Directorate>::new();

    list.load(&backend).await;

    assert_eq!(list.items().len(), 2);
    assert!(list.error().is_none());
    assert!(!list.is_loading());
}

/// Tests a failed fetch.
///
/// Expected: user-facing error message, items untouched
#[tokio::test]
async fn failed_fetch_sets_error() {
    let backend = TestBuilder::new()
        .failing(Method::Get, "internet_users", server_error())
        .build();
    let mut list = ListState::with_items(vec![mock_internet_user("1", "Ali", "ali01", "555")]);

    list.load(&backend).await;

    assert_eq!(
        list.error(),
        Some("Failed to fetch internet users. Please try again later.")
    );
    assert_eq!(list.items().len(), 1);
}

/// Tests that a cancelled fetch is ignored.
///
/// Expected: no error, items untouched
#[test]
fn cancelled_fetch_changes_nothing() {
    let mut list = ListState::with_items(vec![mock_internet_user("1", "Ali", "ali01", "555")]);

    list.begin_load();
    list.finish_load(Err::<Vec<InternetUser>, _>(ApiError::Cancelled));

    assert!(list.error().is_none());
    assert_eq!(list.items().len(), 1);
}

/// Tests that loosely typed backend records decode.
///
/// Expected: numeric ids and fields become strings
#[tokio::test]
async fn decodes_loose_records() {
    let backend = MockBackend::new();
    backend.insert_raw(
        "internet_users",
        vec![serde_json::json!({
            "id": 3,
            "name": "Ali",
            "username": "ali01",
            "device_limit": 2,
            "status": "Deactive",
            "violations": "1"
        })],
    );
    let mut list = ListState::<InternetUser>::new();

    list.load(&backend).await;

    let user = &list.items()[0];
    assert_eq!(user.id.as_str(), "3");
    assert_eq!(user.device_limit, "2");
    assert_eq!(user.status.as_str(), "deactive");
}

/// Tests that records with unknown status or violation values still load.
///
/// Expected: every record kept, unknown values read as defaults, no error
#[tokio::test]
async fn unknown_values_do_not_fail_collection() {
    let backend = MockBackend::new();
    backend.insert_raw(
        "internet_users",
        vec![
            serde_json::json!({ "id": 1, "username": "ali01", "violations": "0" }),
            serde_json::json!({ "id": 2, "username": "sara02", "violations": "3" }),
            serde_json::json!({ "id": 3, "username": "omar03", "status": "banned" }),
        ],
    );
    let mut list = ListState::<InternetUser>::new();

    list.load(&backend).await;

    assert!(list.error().is_none());
    assert_eq!(list.items().len(), 3);
    assert_eq!(list.items()[1].violations, ViolationLevel::None);
    assert_eq!(list.items()[2].status, UserStatus::Active);
}

/// Tests violation counts stored as text, null or garbage.
///
/// Expected: all records load, text parsed, null and garbage read as zero
#[tokio::test]
async fn violation_counts_decode_leniently() {
    let backend = MockBackend::new();
    backend.insert_raw(
        "violations",
        vec![
            serde_json::json!({ "id": 1, "username": "ali01", "violation_count": "2" }),
            serde_json::json!({ "id": 2, "username": "sara02", "violation_count": null }),
            serde_json::json!({ "id": 3, "username": "omar03", "violation_count": "many" }),
        ],
    );
    let mut list = ListState::<Violation>::new();

    list.load(&backend).await;

    assert!(list.error().is_none());
    let counts: Vec<u8> = list.items().iter().map(|v| v.violation_count).collect();
    assert_eq!(counts, vec![2, 0, 0]);
}
