//! Shared domain types for the Mentor chat relay.
//!
//! Conversation turns, the chat request/response schema, generation and
//! safety settings, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod turn;
