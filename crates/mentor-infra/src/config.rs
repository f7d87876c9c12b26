//! Configuration loader for the Mentor relay.
//!
//! Reads an optional TOML settings file and deserializes it into
//! [`MentorSettings`], then layers environment overrides on top. Falls back
//! to defaults when the file is missing or malformed.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: model credential (absent or blank leaves the model disabled)
//! - `GEMINI_MODEL`: model identifier
//! - `GEMINI_BASE_URL`: REST API base URL
//! - `GEMINI_TIMEOUT_SECS`: per-call timeout
//! - `MENTOR_STRICT_HISTORY`: reject unrecognized history items instead of dropping them

use std::path::Path;

use secrecy::SecretString;

use mentor_types::chat::HistoryMode;
use mentor_types::config::MentorSettings;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";
pub const STRICT_HISTORY_VAR: &str = "MENTOR_STRICT_HISTORY";

/// Load settings from `path`.
///
/// - If the file does not exist, returns [`MentorSettings::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed settings.
pub async fn load_settings(path: &Path) -> MentorSettings {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return MentorSettings::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return MentorSettings::default();
        }
    };

    match toml::from_str::<MentorSettings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            MentorSettings::default()
        }
    }
}

/// Read an environment variable, treating unset and non-Unicode values alike.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment overrides to `settings`.
///
/// `lookup` abstracts the environment so tests never mutate process state.
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(settings: &mut MentorSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(model) = lookup(MODEL_VAR).filter(|v| !v.trim().is_empty()) {
        settings.model.name = model.trim().to_string();
    }

    if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        settings.model.base_url = base_url.trim().to_string();
    }

    if let Some(raw) = lookup(TIMEOUT_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(0) => settings.model.timeout_secs = None,
            Ok(secs) => settings.model.timeout_secs = Some(secs),
            Err(err) => tracing::warn!("Ignoring {TIMEOUT_VAR}={raw:?}: {err}"),
        }
    }

    if let Some(raw) = lookup(STRICT_HISTORY_VAR) {
        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.history_mode = HistoryMode::Strict,
            "0" | "false" | "no" | "off" | "" => settings.history_mode = HistoryMode::Lenient,
            other => tracing::warn!("Ignoring {STRICT_HISTORY_VAR}={other:?}: expected a boolean"),
        }
    }
}

/// Resolve the model API key. Blank values count as absent.
pub fn api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<SecretString> {
    lookup(API_KEY_VAR)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(SecretString::from)
}
