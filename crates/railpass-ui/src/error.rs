//! Error types for the UI crate.

use thiserror::Error;

/// UI-specific errors.
#[derive(Debug, Error)]
pub enum UiError {
    /// The native window could not be created or run.
    #[error("failed to launch window: {0}")]
    Launch(String),
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
