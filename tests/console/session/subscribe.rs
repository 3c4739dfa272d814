//! Tests for SessionContext subscriptions.

use std::{cell::RefCell, rc::Rc};

use netroster::console::session::{SessionContext, SessionEvent};
use netroster_test_utils::prelude::*;

const KEY: &str = "loggedInUser";

/// Tests that subscribers see every login and logout.
///
/// Expected: events delivered in order
#[test]
fn notifies_subscribers() -> Result<(), TestError> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut session = SessionContext::restore(MemoryStorage::new(), KEY);
    let sink = events.clone();
    session.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let user = mock_session_user("7", false);
    session.login(user.clone())?;
    session.logout()?;

    assert_eq!(
        *events.borrow(),
        vec![SessionEvent::LoggedIn(user), SessionEvent::LoggedOut]
    );

    Ok(())
}

/// Tests that unsubscribed listeners are no longer called.
///
/// Expected: no events after unsubscribe
#[test]
fn unsubscribe_stops_notifications() -> Result<(), TestError> {
    let count = Rc::new(RefCell::new(0));
    let mut session = SessionContext::restore(MemoryStorage::new(), KEY);
    let counter = count.clone();
    let id = session.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(session.unsubscribe(id));
    assert!(!session.unsubscribe(id));
    session.login(mock_session_user("7", false))?;

    assert_eq!(*count.borrow(), 0);

    Ok(())
}
