use thiserror::Error;

use crate::llm::LlmError;

/// Failures of a single chat request.
///
/// Display strings are the exact `error` texts returned to the client.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The model adapter was never configured (missing or invalid API key).
    #[error("Gemini model is not configured. Check API key.")]
    NotConfigured,

    #[error("No message provided.")]
    MissingMessage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Only raised when history is normalized in strict mode.
    #[error("Unrecognized history item at index {index}.")]
    InvalidHistory { index: usize },

    #[error("An error occurred while contacting the Gemini API: {0}")]
    Upstream(String),
}

impl ChatError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChatError::MissingMessage | ChatError::InvalidBody(_) | ChatError::InvalidHistory { .. }
        )
    }
}

impl From<LlmError> for ChatError {
    fn from(e: LlmError) -> Self {
        ChatError::Upstream(e.to_string())
    }
}
