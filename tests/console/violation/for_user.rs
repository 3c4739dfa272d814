//! Tests for Violation::for_user.

use netroster::model::{
    id::RecordId,
    user::{InternetUser, ViolationLevel},
    violation::Violation,
};
use netroster_test_utils::prelude::*;

fn user_with(violations: ViolationLevel) -> InternetUser {
    InternetUser {
        violations,
        comment: "Shared account".to_string(),
        ..mock_internet_user("5", "Ali", "ali01", "555")
    }
}

/// Tests the count carried for each violation level.
///
/// Expected: 0, 1 and 2 for none, warning and blocked
#[test]
fn count_follows_level() {
    let counts: Vec<u8> = [
        ViolationLevel::None,
        ViolationLevel::Warning,
        ViolationLevel::Blocked,
    ]
    .into_iter()
    .map(|level| Violation::for_user(&user_with(level)).violation_count)
    .collect();

    assert_eq!(counts, vec![0, 1, 2]);
}

/// Tests the fields copied from the user.
///
/// Expected: identity, placement and comment copied, signatures blank
#[test]
fn copies_user_fields() {
    let user = user_with(ViolationLevel::Warning);

    let violation = Violation::for_user(&user);

    assert_eq!(violation.username, "ali01");
    assert_eq!(violation.name, "Ali");
    assert_eq!(violation.position, user.position);
    assert_eq!(violation.deputy_ministry, user.deputy_ministry);
    assert_eq!(violation.directorate, user.directorate);
    assert_eq!(violation.comment, "Shared account");
    assert!(violation.user_signature.is_empty());
    assert!(violation.directorate_signature.is_empty());
}

/// Tests that a new record carries no id of its own.
///
/// Expected: empty id, no "id" key in the request body
#[test]
fn new_record_omits_id() -> Result<(), TestError> {
    let violation = Violation::for_user(&user_with(ViolationLevel::Blocked));

    let body = serde_json::to_value(&violation)?;

    assert_eq!(violation.id, RecordId::default());
    assert!(body.get("id").is_none());
    assert_eq!(body["username"], "ali01");
    assert_eq!(body["violation_count"], 2);

    Ok(())
}
