//! Infrastructure layer for the Mentor relay.
//!
//! Contains the Gemini REST implementation of the `GenerativeModel` port
//! defined in `mentor-core`, and settings loading from TOML and the
//! environment.

pub mod config;
pub mod llm;
