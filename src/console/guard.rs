//! Navigation guards.
//!
//! A guard decides whether a protected view may render for the current session. It
//! is a navigation convenience only; the backend authorises every request on its own.

use crate::model::account::SessionUser;

/// Who may see a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any logged-in operator
    Authenticated,
    /// Operators whose session carries the admin flag
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    RedirectHome,
}

/// Decide from the session as it is at render time.
pub fn check(session: Option<&SessionUser>, access: Access) -> GuardDecision {
    match (session, access) {
        (None, _) => GuardDecision::RedirectToLogin,
        (Some(user), Access::Admin) if !user.is_admin => GuardDecision::RedirectHome,
        (Some(_), _) => GuardDecision::Render,
    }
}
