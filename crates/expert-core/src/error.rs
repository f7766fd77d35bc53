//! Unified error type exposed by **`expert-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`crate::CompletionClient`]. Callers only
//! ever have to match on a single enum, no matter which back-end produced the
//! failure.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CompletionError>;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Generic forwarding of any backend-specific error (transport, auth,
    /// rate limit, …) that doesn’t fit another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The provider answered, but the reply carried no text to show.
    #[error("completion contained no text")]
    EmptyCompletion,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
