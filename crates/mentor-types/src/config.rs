//! Settings types for the Mentor relay.
//!
//! `MentorSettings` is the shape of the optional `mentor.toml` file. Every
//! field has a default, so an empty or missing file yields the stock Gemini
//! configuration.

use serde::{Deserialize, Serialize};

use crate::chat::HistoryMode;
use crate::llm::{
    default_safety_settings, GenerationConfig, SafetySetting, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// Top-level relay settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentorSettings {
    pub model: ModelSettings,

    /// Policy for history items that are neither canonical nor legacy.
    pub history_mode: HistoryMode,
}

/// Remote model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Gemini model identifier.
    pub name: String,

    /// REST API base URL (overridable for proxies and tests).
    pub base_url: String,

    /// Per-call timeout in seconds. `None` waits for as long as the remote takes.
    pub timeout_secs: Option<u64>,

    pub generation: GenerationConfig,

    pub safety_settings: Vec<SafetySetting>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            generation: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
        }
    }
}
