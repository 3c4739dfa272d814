//! Request lifetimes.
//!
//! A [`RequestScope`] belongs to one view. Requests run through it can be aborted
//! together when the view goes away, so a late response is reported as
//! [`ApiError::Cancelled`] instead of being applied to state nobody shows anymore.

use std::{cell::RefCell, future::Future, rc::Rc};

use futures::future::{AbortHandle, Abortable};

use crate::error::ApiError;

#[derive(Debug, Default)]
struct ScopeState {
    cancelled: bool,
    next_id: u64,
    pending: Vec<(u64, AbortHandle)>,
}

/// Handle shared by every request of a view. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    state: Rc<RefCell<ScopeState>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `request`, resolving to [`ApiError::Cancelled`] if the scope is cancelled first.
    pub async fn run<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return Err(ApiError::Cancelled);
            }
            let id = state.next_id;
            state.next_id += 1;
            state.pending.push((id, handle));
            id
        };

        let result = Abortable::new(request, registration).await;

        self.state
            .borrow_mut()
            .pending
            .retain(|(pending_id, _)| *pending_id != id);

        result.unwrap_or(Err(ApiError::Cancelled))
    }

    /// Abort every pending request and refuse new ones.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        for (_, handle) in state.pending.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    /// Number of requests still awaiting a response.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }
}
