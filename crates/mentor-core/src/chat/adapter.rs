//! Remote model adapter.
//!
//! Owns the process-wide model handle, or records why there is none. Each
//! call opens a fresh [`ChatSession`] over the shared handle, so concurrent
//! requests never share mutable state.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use mentor_types::error::ChatError;
use mentor_types::turn::Content;

use super::session::ChatSession;
use crate::llm::box_provider::BoxGenerativeModel;

/// The configured model, or the reason it could not be configured.
///
/// A disabled adapter stays disabled for the process lifetime.
#[derive(Clone)]
pub enum ModelAdapter {
    Enabled(Arc<BoxGenerativeModel>),
    Disabled { reason: String },
}

impl ModelAdapter {
    pub fn enabled(model: BoxGenerativeModel) -> Self {
        ModelAdapter::Enabled(Arc::new(model))
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        ModelAdapter::Disabled {
            reason: reason.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ModelAdapter::Enabled(_))
    }

    /// Name of the configured model, if any.
    pub fn model_name(&self) -> Option<&str> {
        match self {
            ModelAdapter::Enabled(model) => Some(model.name()),
            ModelAdapter::Disabled { .. } => None,
        }
    }

    /// Seed a session with `full_history`, send `user_message`, return the reply text.
    ///
    /// Every failure from the remote call is folded into
    /// [`ChatError::Upstream`]; nothing escapes as a panic.
    pub async fn generate_reply(
        &self,
        full_history: Vec<Content>,
        user_message: &str,
    ) -> Result<String, ChatError> {
        let model = match self {
            ModelAdapter::Enabled(model) => model,
            ModelAdapter::Disabled { .. } => return Err(ChatError::NotConfigured),
        };

        let span = info_span!(
            "gen_ai.chat",
            gen_ai.request.model = model.name(),
            gen_ai.request.turns = full_history.len() + 1,
        );

        let mut session = ChatSession::start(model, full_history);
        match session.send_message(user_message).instrument(span).await {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::error!(model = model.name(), error = %e, "error during model call");
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelAdapter::Enabled(model) => f.debug_tuple("Enabled").field(&model.name()).finish(),
            ModelAdapter::Disabled { reason } => {
                f.debug_struct("Disabled").field("reason", reason).finish()
            }
        }
    }
}
