//! GenerativeModel trait definition.
//!
//! This is the abstraction the remote model client implements. Uses RPITIT
//! for `generate`; `BoxGenerativeModel` provides the object-safe wrapper.

use mentor_types::llm::LlmError;
use mentor_types::turn::{Content, Turn};

/// Trait for generative model backends (Gemini REST, test stubs).
///
/// Implementations live in mentor-infra (e.g., `GeminiModel`).
pub trait GenerativeModel: Send + Sync {
    /// Model identifier, used for logging and the health endpoint.
    fn name(&self) -> &str;

    /// Generate the next turn for a conversation.
    ///
    /// `contents` is the full conversation, oldest first, ending with the
    /// user turn to answer. Returns the model's turn.
    fn generate(
        &self,
        contents: &[Content],
    ) -> impl std::future::Future<Output = Result<Turn, LlmError>> + Send;
}
