//! Tests for session::sign_in.

use std::{cell::RefCell, rc::Rc};

use netroster::{
    console::session::{sign_in, SessionContext, SessionEvent},
    error::{ApiError, Error},
    model::account::Credentials,
};
use netroster_test_utils::prelude::*;

const KEY: &str = "loggedInUser";

/// Tests a successful login against the backend.
///
/// Expected: operator returned and persisted
#[tokio::test]
async fn stores_backend_user() -> Result<(), TestError> {
    let backend = TestBuilder::new()
        .with_account(mock_credentials(), mock_session_user("7", true))
        .build();
    let storage = MemoryStorage::new();
    let mut session = SessionContext::restore(storage.clone(), KEY);

    let user = sign_in(&mut session, &backend, &mock_credentials()).await?;

    assert_eq!(user.id.as_str(), "7");
    assert!(storage.get(KEY).is_some());
    assert!(session.is_admin());

    Ok(())
}

/// Tests rejected credentials.
///
/// Expected: Err(ApiError::Status 401), nothing persisted
#[tokio::test]
async fn rejected_credentials_store_nothing() {
    let backend = TestBuilder::new()
        .with_account(mock_credentials(), mock_session_user("7", true))
        .build();
    let storage = MemoryStorage::new();
    let mut session = SessionContext::restore(storage.clone(), KEY);
    let wrong = Credentials {
        password: "guess".to_string(),
        ..mock_credentials()
    };

    let result = sign_in(&mut session, &backend, &wrong).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Status { status: 401, .. }))
    ));
    assert!(storage.get(KEY).is_none());
    assert!(!session.is_authenticated());
}

/// Tests that subscribers hear about a backend-driven login.
///
/// Expected: one LoggedIn event carrying the backend's operator
#[tokio::test]
async fn notifies_subscribers() -> Result<(), TestError> {
    let backend = TestBuilder::new()
        .with_account(mock_credentials(), mock_session_user("7", false))
        .build();
    let mut session = SessionContext::restore(MemoryStorage::new(), KEY);
    let events = Rc::new(RefCell::new(Vec::new()));
    session.subscribe({
        let events = events.clone();
        move |event: &SessionEvent| events.borrow_mut().push(event.clone())
    });

    sign_in(&mut session, &backend, &mock_credentials()).await?;

    assert_eq!(
        *events.borrow(),
        vec![SessionEvent::LoggedIn(mock_session_user("7", false))]
    );

    Ok(())
}
