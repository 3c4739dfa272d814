//! Tests for SessionContext::login.

use netroster::{console::session::SessionContext, model::account::SessionUser};
use netroster_test_utils::prelude::*;

const KEY: &str = "loggedInUser";

/// Tests that login persists the marker.
///
/// Expected: storage holds the serialized operator, context reports it
#[test]
fn persists_marker() -> Result<(), TestError> {
    let storage = MemoryStorage::new();
    let mut session = SessionContext::restore(storage.clone(), KEY);

    session.login(mock_session_user("7", true))?;

    let stored: SessionUser = serde_json::from_str(&storage.get(KEY).unwrap())?;
    assert_eq!(stored.id.as_str(), "7");
    assert_eq!(stored.token.as_deref(), Some("token-123"));
    assert!(session.is_authenticated());
    assert!(session.is_admin());

    Ok(())
}

/// Tests that a persisted marker is restored by a new context.
///
/// Expected: same operator
#[test]
fn restores_persisted_marker() -> Result<(), TestError> {
    let storage = MemoryStorage::new();
    let mut first = SessionContext::restore(storage.clone(), KEY);
    first.login(mock_session_user("7", false))?;

    let second = SessionContext::restore(storage, KEY);

    assert_eq!(second.current_user(), first.current_user());
    assert!(!second.is_admin());

    Ok(())
}

/// Tests that a storage failure leaves the session anonymous.
///
/// Expected: Err(Storage), not authenticated
#[test]
fn storage_failure_keeps_session_anonymous() {
    let storage = MemoryStorage::new();
    storage.fail_writes();
    let mut session = SessionContext::restore(storage, KEY);

    assert!(session.login(mock_session_user("7", false)).is_err());
    assert!(!session.is_authenticated());
}
