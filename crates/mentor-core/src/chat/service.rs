//! Chat service: the per-request state machine.
//!
//! `Validating -> (Processing | Rejected) -> Responded`. The configuration
//! check runs before anything looks at the request, then the message is
//! validated, the history normalized and framed, and one remote call made.

use mentor_types::chat::{ChatReply, ChatRequest, HistoryMode};
use mentor_types::error::ChatError;

use super::adapter::ModelAdapter;
use crate::history::normalize_history;
use crate::persona::Persona;

/// Wires the adapter, persona and history policy together.
///
/// Constructed once at startup and shared read-only by all requests.
#[derive(Debug, Clone)]
pub struct ChatService {
    adapter: ModelAdapter,
    persona: Persona,
    history_mode: HistoryMode,
}

impl ChatService {
    pub fn new(adapter: ModelAdapter, persona: Persona, history_mode: HistoryMode) -> Self {
        Self {
            adapter,
            persona,
            history_mode,
        }
    }

    pub fn adapter(&self) -> &ModelAdapter {
        &self.adapter
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history_mode
    }

    /// Fails with [`ChatError::NotConfigured`] when the adapter is disabled.
    pub fn ensure_configured(&self) -> Result<(), ChatError> {
        if self.adapter.is_enabled() {
            Ok(())
        } else {
            Err(ChatError::NotConfigured)
        }
    }

    /// Handle one chat request end to end.
    pub async fn reply(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
        self.ensure_configured()?;

        let message = request
            .message()
            .ok_or(ChatError::MissingMessage)?
            .to_string();

        let history = normalize_history(request.history.unwrap_or_default(), self.history_mode)?;
        let full_history = self.persona.frame(history);

        tracing::debug!(turns = full_history.len(), "sending chat to model");

        let reply = self.adapter.generate_reply(full_history, &message).await?;
        Ok(ChatReply { reply })
    }
}
