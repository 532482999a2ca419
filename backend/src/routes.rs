use crate::config::GraderConfig;
use crate::error::{format_error, GraderError};
use crate::session::Session;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;
use visual_core::question::ValidationIssue;
use visual_core::{correct_selection, evaluate_visual, VisualAnswer, VisualQuestion};

pub struct AppState {
    pub config: GraderConfig,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/evaluate", post(evaluate))
        .route("/validate", post(validate))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Hello from the visual question grader!"
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": visual_core::version() }))
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub question: Value,
    pub answer: Value,
    #[serde(default)]
    pub reveal: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EvaluateResponse {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,
}

async fn evaluate(Json(req): Json<EvaluateRequest>) -> Json<EvaluateResponse> {
    let question = match VisualQuestion::from_json(&req.question) {
        Ok(q) => q,
        Err(e) => {
            debug!("Unreadable question graded as incorrect: {}", e);
            return Json(EvaluateResponse { correct: false, expected: None });
        }
    };

    let correct = match VisualAnswer::try_from(&req.answer) {
        Ok(answer) => evaluate_visual(&question, &answer),
        Err(e) => {
            debug!("Malformed answer graded as incorrect: {}", e);
            false
        }
    };

    // Count-mode grids and single-mode angles have no answer key to reveal
    let expected = if req.reveal {
        correct_selection(&question).map(|ids| ids.into_iter().collect())
    } else {
        None
    };

    Json(EvaluateResponse { correct, expected })
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub subtype: &'static str,
    pub gradable: bool,
    pub issues: Vec<ValidationIssue>,
}

async fn validate(Json(value): Json<Value>) -> Result<Json<ValidateResponse>, GraderError> {
    let question = VisualQuestion::from_json(&value)?;
    let issues = question.validate();
    let gradable = question.is_gradable();
    debug!("Validated {} question: {} issues", question.subtype(), issues.len());
    Ok(Json(ValidateResponse { subtype: question.subtype(), gradable, issues }))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let span = info_span!("session", id = %Uuid::new_v4());
    ws.on_upgrade(move |socket| handle_socket(socket, state).instrument(span))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("Client connected");

    let (mut sender, mut receiver) = socket.split();
    let mut session = Session::new(state.config.relation_tolerance);

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                warn!("WebSocket receive failed: {}", e);
                break;
            }
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let reply = match session.handle(&text) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Command failed: {}", e);
                format_error(e.code(), &e.to_string(), "error")
            }
        };

        if sender.send(Message::Text(reply)).await.is_err() {
            break;
        }
    }

    match session.question() {
        Some(q) => info!("Client disconnected with a {} question loaded", q.subtype()),
        None => info!("Client disconnected"),
    }
}
