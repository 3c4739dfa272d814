//! Tests for SessionContext::logout and session::sign_out.

use netroster::console::session::{sign_out, SessionContext};
use netroster_test_utils::prelude::*;

const KEY: &str = "loggedInUser";

/// Tests that logout clears the marker.
///
/// Expected: storage empty, context anonymous
#[test]
fn clears_marker() -> Result<(), TestError> {
    let storage = MemoryStorage::new();
    let mut session = SessionContext::restore(storage.clone(), KEY);
    session.login(mock_session_user("7", false))?;

    session.logout()?;

    assert!(storage.get(KEY).is_none());
    assert!(session.current_user().is_none());

    Ok(())
}

/// Tests that a failing backend logout still clears the local session.
///
/// Expected: Ok, marker cleared, POST /logout attempted
#[tokio::test]
async fn sign_out_is_best_effort() -> Result<(), TestError> {
    let backend = TestBuilder::new()
        .failing(Method::Post, "logout", server_error())
        .build();
    let storage = MemoryStorage::new();
    let mut session = SessionContext::restore(storage.clone(), KEY);
    session.login(mock_session_user("7", false))?;

    sign_out(&mut session, &backend).await?;

    assert!(storage.get(KEY).is_none());
    assert!(!session.is_authenticated());
    assert_eq!(backend.requests_with(Method::Post)[0].path, "logout");

    Ok(())
}
