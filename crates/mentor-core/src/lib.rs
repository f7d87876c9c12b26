//! Request-handling logic for the Mentor chat relay.
//!
//! This crate defines the `GenerativeModel` port that the infrastructure
//! layer implements, plus everything that happens to a chat request between
//! the HTTP layer and the remote model: history normalization, persona
//! framing, the chat session and the adapter. It depends only on
//! `mentor-types` -- never on `mentor-infra` or any network crate.

pub mod chat;
pub mod history;
pub mod llm;
pub mod persona;
