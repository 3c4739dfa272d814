use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Failed to access session storage: {0}")]
    Storage(String),
    #[error("Failed to serialize session: {0}")]
    Serialize(String),
}
