//! Error types for assertion generation

use thiserror::Error;

/// Errors that can occur while preparing input for the generator
///
/// The traversal itself is infallible; the only failure mode is the
/// collaborating parser rejecting the input.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
