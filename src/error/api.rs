use thiserror::Error;

/// Failure of a request to the backend collaborator.
///
/// Not-found and authorization failures are not given their own variants; they
/// surface as [`ApiError::Status`] like any other non-2xx response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    #[error("Failed to serialize request body: {0}")]
    Encode(String),
    /// The owning view went away before the response arrived.
    #[error("Request was cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Network(_) => "Could not reach the server, please try again.".to_string(),
            _ => "Something went wrong, please try again.".to_string(),
        }
    }
}
