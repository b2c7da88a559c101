//! Store-level error model.

use thiserror::Error;

use vettrack_core::{DomainError, FieldErrors};

/// Failure of a single store operation.
///
/// Nothing here is fatal to the process: reads degrade to an empty list with
/// a visible notice, and failed writes leave the in-progress form intact for
/// resubmission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The submitted draft failed validation; nothing was written.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The referenced record does not exist within the caller's tenant.
    #[error("not found")]
    NotFound,

    /// The backing store could not serve the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(fields) => StoreError::Validation(fields),
            DomainError::NotFound => StoreError::NotFound,
            DomainError::InvalidId(msg) => {
                let mut fields = FieldErrors::new();
                fields.push("id", msg);
                StoreError::Validation(fields)
            }
            // Authorization is decided before a store call is made.
            DomainError::Unauthorized => StoreError::unavailable("operation not permitted"),
        }
    }
}
