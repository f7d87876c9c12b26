//! Generative model implementations.
//!
//! Contains the concrete Gemini implementation of the
//! [`GenerativeModel`](mentor_core::llm::provider::GenerativeModel) trait and
//! the factory ([`create_adapter`]) that turns startup configuration into a
//! [`ModelAdapter`], enabled or disabled.

pub mod gemini;

use secrecy::SecretString;

use mentor_core::chat::adapter::ModelAdapter;
use mentor_core::llm::box_provider::BoxGenerativeModel;
use mentor_types::config::ModelSettings;

use self::gemini::GeminiModel;

/// Build the process-wide model adapter.
///
/// A missing key or a client that fails to build yields a disabled adapter
/// rather than an error: the server keeps running and reports the
/// misconfiguration on every chat request.
pub fn create_adapter(settings: &ModelSettings, api_key: Option<SecretString>) -> ModelAdapter {
    let Some(api_key) = api_key else {
        tracing::warn!(
            "{} not found. Please set it in your environment.",
            crate::config::API_KEY_VAR
        );
        return ModelAdapter::disabled(format!("{} not set", crate::config::API_KEY_VAR));
    };

    match GeminiModel::new(api_key, settings) {
        Ok(model) => {
            tracing::info!(model = %settings.name, "Gemini model configured");
            ModelAdapter::enabled(BoxGenerativeModel::new(model))
        }
        Err(e) => {
            tracing::error!("Error configuring Gemini model: {e}");
            ModelAdapter::disabled(e.to_string())
        }
    }
}
