//! Tests for SessionContext::user_id.

use netroster::{console::session::SessionContext, model::id::RecordId};
use netroster_test_utils::prelude::*;

const KEY: &str = "loggedInUser";

/// Tests the id of a logged-in operator.
///
/// Expected: Some(id)
#[test]
fn returns_operator_id() -> Result<(), TestError> {
    let mut session = SessionContext::restore(MemoryStorage::new(), KEY);

    session.login(mock_session_user("7", false))?;

    assert_eq!(session.user_id(), Some(&RecordId::from("7")));

    Ok(())
}

/// Tests a stored marker whose id is blank.
///
/// Expected: None, so no request targets the bare collection path
#[test]
fn blank_id_is_none() -> Result<(), TestError> {
    let mut session = SessionContext::restore(MemoryStorage::new(), KEY);

    session.login(mock_session_user("", true))?;

    assert!(session.is_authenticated());
    assert_eq!(session.user_id(), None);

    Ok(())
}

/// Tests an anonymous context.
///
/// Expected: None
#[test]
fn anonymous_has_no_id() {
    let session = SessionContext::restore(MemoryStorage::new(), KEY);

    assert_eq!(session.user_id(), None);
}
