//! Application error type mapping to HTTP status codes and the `{error}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mentor_types::error::ChatError;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat request failures (configuration, validation, upstream).
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Chat(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Chat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let AppError::Chat(e) = self;

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{e}");
        } else {
            tracing::warn!(status = status.as_u16(), "{e}");
        }

        (status, Json(ErrorBody { error: e.to_string() })).into_response()
    }
}
