//! Stateful chat session over a shared model handle.
//!
//! A session is created per request, seeded with the full history, and
//! discarded once the reply is returned. The model handle it borrows is
//! shared by all concurrent sessions.

use mentor_types::llm::LlmError;
use mentor_types::turn::{Content, Turn};

use crate::llm::box_provider::BoxGenerativeModel;

/// A conversation in progress against one model.
pub struct ChatSession<'a> {
    model: &'a BoxGenerativeModel,
    history: Vec<Content>,
}

impl<'a> ChatSession<'a> {
    /// Start a session seeded with an existing history.
    pub fn start(model: &'a BoxGenerativeModel, history: Vec<Content>) -> Self {
        Self { model, history }
    }

    /// Turns exchanged so far, including the seed history.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send a user message and return the model's text.
    ///
    /// On success both the user turn and the model turn are appended to the
    /// history. On failure the history is left as it was before the call.
    pub async fn send_message(&mut self, text: &str) -> Result<String, LlmError> {
        self.history.push(Turn::user(text).into());

        match self.model.generate(&self.history).await {
            Ok(reply) => {
                let text = reply.joined_text();
                self.history.push(reply.into());
                Ok(text)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }
}
