use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ConsoleError(#[from] netroster::Error),
    #[error(transparent)]
    ApiError(#[from] netroster::error::ApiError),
    #[error(transparent)]
    FormError(#[from] netroster::error::FormError),
    #[error(transparent)]
    SessionError(#[from] netroster::error::SessionError),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
