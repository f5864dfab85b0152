use thiserror::Error;

/// Message returned to callers when a query or its context is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Query and content cannot be empty.";

#[derive(Debug, Error)]
pub enum QaError {
    /// The uploaded bytes could not be opened as a PDF.
    #[error("invalid PDF document: {0}")]
    DocumentFormat(String),

    /// Caller input rejected before any work was done.
    #[error("{0}")]
    Validation(String),

    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("generation failed: {0}")]
    Generation(String),

    /// A blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl QaError {
    pub fn empty_input() -> Self {
        QaError::Validation(EMPTY_INPUT_MESSAGE.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
