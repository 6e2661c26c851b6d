//! Service error types.

use everything_model::ModelError;
use thiserror::Error;

/// Result type for service queries.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backend does not support this query.
    #[error("{message} ({status})")]
    Unimplemented { status: u16, message: String },

    /// The backend's payload could not be normalized.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("backend error: {0}")]
    Backend(String),
}

impl ServiceError {
    /// The answer for a query the backend does not implement.
    #[must_use]
    pub fn unimplemented() -> Self {
        ServiceError::Unimplemented {
            status: 400,
            message: "Not Implemented".to_string(),
        }
    }

    #[must_use]
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, ServiceError::Unimplemented { .. })
    }
}
