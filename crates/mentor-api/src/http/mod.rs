//! HTTP layer for the Mentor relay.
//!
//! Axum router with the chat endpoint, a health check and the static chat
//! page. Every failure is returned as a JSON `{ "error": ... }` body.

pub mod error;
pub mod handlers;
pub mod router;
