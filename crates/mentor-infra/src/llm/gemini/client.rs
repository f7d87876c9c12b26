//! GeminiModel -- concrete [`GenerativeModel`] implementation for Google Gemini.
//!
//! Sends non-streaming requests to `{base_url}/models/{model}:generateContent`
//! with the API key in the `x-goog-api-key` header. Generation parameters and
//! safety settings are fixed at construction and sent with every call.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use mentor_core::llm::provider::GenerativeModel;
use mentor_types::config::ModelSettings;
use mentor_types::llm::{LlmError, SafetySetting};
use mentor_types::turn::{Content, Role, Turn};

use super::types::{ErrorEnvelope, GeminiGenerationConfig, GenerateContentRequest, GenerateContentResponse};

/// Finish reasons that mean the candidate was withheld rather than empty.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Google Gemini generative model.
///
/// One instance is built at startup and shared by all requests; the inner
/// `reqwest::Client` pools connections.
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    generation_config: GeminiGenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

impl GeminiModel {
    /// Create a Gemini model client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::AuthenticationFailed`] for an empty key and
    /// [`LlmError::Provider`] if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, settings: &ModelSettings) -> Result<Self, LlmError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(LlmError::AuthenticationFailed("API key is empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| LlmError::Provider {
            message: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.name.clone(),
            generation_config: (&settings.generation).into(),
            safety_settings: settings.safety_settings.clone(),
        })
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn to_request(&self, contents: &[Content]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: contents.to_vec(),
            generation_config: self.generation_config.clone(),
            safety_settings: self.safety_settings.clone(),
        }
    }

    /// Map a non-2xx response to an error, preferring the API's own message.
    fn status_error(status: reqwest::StatusCode, body: &str) -> LlmError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .filter(|envelope| !envelope.error.message.is_empty())
            .map(|envelope| envelope.error.describe())
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            400 => LlmError::InvalidRequest(message),
            401 | 403 => LlmError::AuthenticationFailed(message),
            429 => LlmError::RateLimited(message),
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }

    /// Pull the reply text out of a parsed response.
    fn extract_reply(response: GenerateContentResponse) -> Result<Turn, LlmError> {
        if let Some(text) = response.first_text() {
            return Ok(Turn::text(Role::Model, text));
        }

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(LlmError::PromptBlocked { reason });
        }

        match response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            Some(reason) if BLOCKING_FINISH_REASONS.contains(&reason) => {
                Err(LlmError::ResponseBlocked {
                    finish_reason: reason.to_string(),
                })
            }
            _ => Err(LlmError::EmptyResponse),
        }
    }
}

// No Debug derive: keeps the client and key out of logs entirely.

impl GenerativeModel for GeminiModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, contents: &[Content]) -> Result<Turn, LlmError> {
        let body = self.to_request(contents);

        tracing::debug!(model = %self.model, turns = contents.len(), "calling generateContent");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &error_body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        Self::extract_reply(parsed)
    }
}
