//! Google Gemini model implementation.
//!
//! This module provides [`GeminiModel`], which implements the
//! [`GenerativeModel`](mentor_core::llm::provider::GenerativeModel) trait for
//! the Generative Language `generateContent` REST endpoint.

pub mod client;
pub mod types;

pub use client::GeminiModel;
