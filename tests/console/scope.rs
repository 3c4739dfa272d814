//! Tests for RequestScope.
//!
//! Verifies that requests run to completion inside a live scope and resolve to
//! `Cancelled` once the owning view cancels it.

use futures::{
    future::{self, FutureExt},
    poll,
};
use netroster::{console::scope::RequestScope, error::ApiError};

/// Tests that a request completes normally in a live scope.
///
/// Expected: the request's own result
#[tokio::test]
async fn passes_result_through() {
    let scope = RequestScope::new();

    let result = scope.run(async { Ok::<_, ApiError>(42) }).await;

    assert_eq!(result, Ok(42));
    assert_eq!(scope.pending(), 0);
}

/// Tests that cancelling aborts a request that has not answered yet.
///
/// Expected: Err(Cancelled) instead of a late response
#[tokio::test]
async fn cancel_aborts_pending_request() {
    let scope = RequestScope::new();
    let (respond, response) = futures::channel::oneshot::channel::<u32>();

    let mut request = scope
        .run(response.map(|answer| answer.map_err(|_| ApiError::Network("dropped".to_string()))))
        .boxed_local();

    assert!(poll!(&mut request).is_pending());
    assert_eq!(scope.pending(), 1);

    scope.cancel();
    let _ = respond.send(7);

    assert_eq!(request.await, Err(ApiError::Cancelled));
    assert_eq!(scope.pending(), 0);
}

/// Tests that a cancelled scope refuses new requests.
///
/// Expected: Err(Cancelled) without running the request
#[tokio::test]
async fn cancelled_scope_refuses_new_requests() {
    let scope = RequestScope::new();
    scope.cancel();

    let result = scope.run(future::ready(Ok::<_, ApiError>(1))).await;

    assert!(scope.is_cancelled());
    assert!(result.unwrap_err().is_cancelled());
}

/// Tests that clones share cancellation.
///
/// Expected: cancelling one clone cancels the other
#[test]
fn clones_share_state() {
    let scope = RequestScope::new();
    let view_handle = scope.clone();

    view_handle.cancel();

    assert!(scope.is_cancelled());
}
