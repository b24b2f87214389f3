//! Error types for chat-mock

use thiserror::Error;

/// Result type alias using [`ChatError`]
pub type Result<T> = std::result::Result<T, ChatError>;

/// Main error type for chat-mock
///
/// Layout and focus handling cannot fail; every variant comes from the
/// terminal driver or the optional log sink.
#[derive(Debug, Error)]
pub enum ChatError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal driver failed to start, draw or restore
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Log sink could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl ChatError {
    /// Wrap a driver failure with a short description of the step that failed
    pub(crate) fn terminal(step: &str, err: impl std::fmt::Display) -> Self {
        ChatError::Terminal(format!("{step}: {err}"))
    }
}
