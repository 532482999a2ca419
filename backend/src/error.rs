use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use visual_core::QuestionError;

#[derive(Debug, Error)]
pub enum GraderError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] QuestionError),

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("No question loaded")]
    NoQuestionLoaded,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl GraderError {
    /// Stable code reported to clients alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuestion(_) => "INVALID_QUESTION",
            Self::Payload(_) => "MALFORMED_PAYLOAD",
            Self::NoQuestionLoaded => "NO_QUESTION",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
        }
    }
}

/// Format an error as a WebSocket message for the player.
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!("ERROR_UPDATE:{}", json!({
        "code": code,
        "message": message,
        "severity": severity
    }))
}

impl IntoResponse for GraderError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code(),
            "message": self.to_string(),
        }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}
