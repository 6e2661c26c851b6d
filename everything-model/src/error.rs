//! Model error types.

use everything_types::Kind;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while normalizing raw payloads into entities.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A partial (or an envelope's `data`) was not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// An envelope's tag does not match the entity it is decoded into.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },

    /// A supplied value has the wrong shape for its typed field.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors reported by a [`LinkPreviewSource`](crate::LinkPreviewSource).
///
/// Enrichment never surfaces these; they exist so sources can report
/// what went wrong to their own callers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}
