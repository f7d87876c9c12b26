//! Application state wiring the chat service together.
//!
//! AppState is built once at startup from explicit inputs (settings and the
//! resolved API key) and cloned cheaply into every handler. Tests build it
//! directly around stub models.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use mentor_core::chat::adapter::ModelAdapter;
use mentor_core::chat::service::ChatService;
use mentor_core::persona::Persona;
use mentor_infra::llm::create_adapter;
use mentor_types::config::MentorSettings;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    /// Optional directory of extra static assets served under `/`.
    pub web_dir: Option<PathBuf>,
}

impl AppState {
    /// Wrap an already-built chat service.
    pub fn new(chat_service: ChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            web_dir: None,
        }
    }

    /// Build state around an adapter with the default persona.
    pub fn with_adapter(adapter: ModelAdapter, settings: &MentorSettings) -> Self {
        Self::new(ChatService::new(
            adapter,
            Persona::default(),
            settings.history_mode,
        ))
    }

    /// Initialize production state: configure the Gemini adapter from settings.
    ///
    /// Never fails; a missing key leaves the adapter disabled.
    pub fn init(settings: &MentorSettings, api_key: Option<SecretString>) -> Self {
        let adapter = create_adapter(&settings.model, api_key);
        Self::with_adapter(adapter, settings)
    }

    /// Serve extra static assets from `dir`.
    pub fn with_web_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.web_dir = Some(dir.into());
        self
    }
}
