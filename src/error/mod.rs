//! Error types for the Netroster console.
//!
//! Each concern owns a `thiserror` enum: backend requests ([`ApiError`]), form and
//! wizard validation ([`FormError`]), build-time configuration ([`ConfigError`]) and
//! the persisted session marker ([`SessionError`]). [`Error`] aggregates them so
//! callers that cross concerns can propagate with `?`.

pub mod api;
pub mod config;
pub mod form;
pub mod session;

use thiserror::Error;

pub use api::ApiError;
pub use config::ConfigError;
pub use form::FormError;
pub use session::SessionError;

/// Main error type for the Netroster console.
///
/// Nothing in the console is fatal: every variant is scoped to the user action
/// that triggered it and can be retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend request failure (network, non-2xx status, body decoding).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Local validation failure, never sent to the backend.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Missing or invalid build-time configuration.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session marker could not be persisted or cleared.
    #[error(transparent)]
    SessionError(#[from] SessionError),
}

impl Error {
    /// Message suitable for a blocking user-facing alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError(err) => err.user_message(),
            Self::FormError(err) => err.to_string(),
            Self::ConfigError(_) | Self::SessionError(_) => {
                "Something went wrong, please try again.".to_string()
            }
        }
    }
}
