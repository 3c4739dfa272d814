use thiserror::Error;

/// Local validation failure.
///
/// These are raised before any request is issued and are never sent to the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill all required fields in this step: {}", .fields.join(", "))]
    MissingFields {
        step: usize,
        fields: Vec<&'static str>,
    },
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("A submission is already in progress.")]
    SubmitInFlight,
    #[error("No changes to save.")]
    NothingToUpdate,
}
