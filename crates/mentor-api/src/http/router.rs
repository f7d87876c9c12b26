//! Axum router configuration with middleware.
//!
//! Routes: `GET /` (chat page), `POST /chat`, `GET /health`.
//! Middleware: CORS, tracing.
//!
//! When a web directory is configured (`MENTOR_WEB_DIR` / `--web-dir`) and
//! exists, unknown paths fall through to static files from it. If the
//! directory does not exist, only the built-in routes are served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.web_dir.clone();

    let mut router = Router::new()
        .route("/", get(handlers::index::index))
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health::health_check))
        .with_state(state);

    match web_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(path = %dir.display(), "serving static assets");
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            tracing::warn!(path = %dir.display(), "web directory not found, static assets disabled");
        }
        None => {}
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use mentor_core::chat::adapter::ModelAdapter;
    use mentor_core::llm::box_provider::BoxGenerativeModel;
    use mentor_core::llm::provider::GenerativeModel;
    use mentor_core::persona::{MENTOR_ACKNOWLEDGEMENT, MENTOR_INSTRUCTION};
    use mentor_types::chat::HistoryMode;
    use mentor_types::config::MentorSettings;
    use mentor_types::llm::LlmError;
    use mentor_types::turn::{Content, Turn};

    use super::*;

    /// Answers with a fixed text and records the `contents` it was sent.
    #[derive(Clone)]
    struct StubModel {
        reply: Result<String, String>,
        calls: Arc<Mutex<Vec<Vec<Content>>>>,
    }

    impl StubModel {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Arc::default(),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Arc::default(),
            }
        }
    }

    impl GenerativeModel for StubModel {
        fn name(&self) -> &str {
            "stub-model"
        }

        async fn generate(&self, contents: &[Content]) -> Result<Turn, LlmError> {
            self.calls.lock().unwrap().push(contents.to_vec());
            match &self.reply {
                Ok(text) => Ok(Turn::model(text.clone())),
                Err(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
            }
        }
    }

    fn app_with(model: &StubModel, mode: HistoryMode) -> Router {
        let settings = MentorSettings {
            history_mode: mode,
            ..Default::default()
        };
        let adapter = ModelAdapter::enabled(BoxGenerativeModel::new(model.clone()));
        build_router(AppState::with_adapter(adapter, &settings))
    }

    fn disabled_app() -> Router {
        let settings = MentorSettings::default();
        build_router(AppState::with_adapter(
            ModelAdapter::disabled("GEMINI_API_KEY not set"),
            &settings,
        ))
    }

    fn post_chat(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_chat_returns_reply() {
        let model = StubModel::ok("Hi, I'm your mentor.");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(
            app,
            post_chat(json!({ "message": "Hello", "history": [] }).to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "reply": "Hi, I'm your mentor." }));

        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                Turn::user(MENTOR_INSTRUCTION),
                Turn::model(MENTOR_ACKNOWLEDGEMENT),
                Turn::user("Hello"),
            ]
        );
    }

    #[tokio::test]
    async fn test_multibyte_reply_is_returned_intact() {
        let model = StubModel::ok("Très bien ✓");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(app, post_chat(json!({ "message": "Ça va?" }).to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "Très bien ✓");
        assert_eq!(model.calls.lock().unwrap()[0][2], Turn::user("Ça va?"));
    }

    #[tokio::test]
    async fn test_chat_without_message_is_rejected() {
        let model = StubModel::ok("unused");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(app, post_chat(json!({ "history": [] }).to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "No message provided." }));
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_with_empty_message_is_rejected() {
        let model = StubModel::ok("unused");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(app, post_chat(json!({ "message": "" }).to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No message provided.");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_reported() {
        let model = StubModel::failing("quota exceeded");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(app, post_chat(json!({ "message": "Hi" }).to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("An error occurred while contacting the Gemini API: "));
        assert!(error.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_legacy_history_is_converted() {
        let model = StubModel::ok("ok");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, _) = send(
            app,
            post_chat(
                json!({
                    "message": "Next",
                    "history": [
                        { "role": "user", "text": "hi" },
                        { "role": "model", "text": "hello" },
                    ],
                })
                .to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let calls = model.calls.lock().unwrap();
        let contents = &calls[0];
        assert_eq!(contents.len(), 5);
        assert_eq!(
            serde_json::to_value(&contents[2]).unwrap(),
            json!({ "role": "user", "parts": [{ "text": "hi" }] })
        );
        assert_eq!(contents[3], Turn::model("hello"));
        assert_eq!(contents[4], Turn::user("Next"));
    }

    #[tokio::test]
    async fn test_parts_history_is_forwarded_unchanged() {
        let model = StubModel::ok("ok");
        let app = app_with(&model, HistoryMode::Strict);
        let history = json!([
            { "role": "user", "parts": ["hi"] },
            { "role": "model", "parts": [{ "inline_data": { "mime_type": "image/png", "data": "AA==" } }] },
            { "role": "USER", "parts": [{ "text": "upper" }] },
            { "role": "user", "parts": [{ "foo": 1 }], "text": "ignored" },
        ]);

        let (status, _) = send(
            app,
            post_chat(json!({ "message": "Next", "history": history.clone() }).to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let calls = model.calls.lock().unwrap();
        let sent = serde_json::to_value(&calls[0][2..6]).unwrap();
        assert_eq!(sent, history);
        assert_eq!(calls[0][6], Turn::user("Next"));
    }

    #[tokio::test]
    async fn test_unrecognized_history_is_dropped_in_lenient_mode() {
        let model = StubModel::ok("ok");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, _) = send(
            app,
            post_chat(
                json!({ "message": "Hi", "history": [{ "foo": 1 }, 42] }).to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(model.calls.lock().unwrap()[0].len(), 3);
    }

    #[tokio::test]
    async fn test_unrecognized_history_is_rejected_in_strict_mode() {
        let model = StubModel::ok("ok");
        let app = app_with(&model, HistoryMode::Strict);

        let (status, body) = send(
            app,
            post_chat(
                json!({
                    "message": "Hi",
                    "history": [{ "role": "user", "text": "hi" }, { "foo": 1 }],
                })
                .to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Unrecognized history item at index 1." }));
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let model = StubModel::ok("unused");
        let app = app_with(&model, HistoryMode::Lenient);

        let (status, body) = send(app, post_chat("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body: "));
    }

    #[tokio::test]
    async fn test_unconfigured_model_fails_before_validation() {
        let (status, body) = send(
            disabled_app(),
            post_chat(json!({ "message": "Hello" }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Gemini model is not configured. Check API key." })
        );

        let (status, body) = send(disabled_app(), post_chat("{not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Gemini model is not configured. Check API key.");
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let model = StubModel::ok("unused");
        let request = || Request::get("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app_with(&model, HistoryMode::Lenient), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model_configured"], true);
        assert_eq!(body["model"], "stub-model");
        assert_eq!(body["history_mode"], "lenient");

        let (status, body) = send(disabled_app(), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model_configured"], false);
        assert_eq!(body["model"], Value::Null);
    }

    #[tokio::test]
    async fn test_index_serves_chat_page() {
        let response = disabled_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/chat"));
    }

    #[tokio::test]
    async fn test_web_dir_serves_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.css"), "body {}").unwrap();

        let state = AppState::with_adapter(
            ModelAdapter::disabled("no key"),
            &MentorSettings::default(),
        )
        .with_web_dir(dir.path());
        let response = build_router(state)
            .oneshot(Request::get("/app.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
