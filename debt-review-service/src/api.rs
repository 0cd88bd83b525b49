use axum::{
    Router,
    extract::{Path, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{Next, from_fn},
    response::{Json, Response},
    routing::{get, post},
};
use debt_flow::{
    FlowError, FlowRunner, Pacer, SessionSnapshot, Turn, TurnStatus, UserInput,
    pacing::reveal_schedule,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub runner: FlowRunner,
    pub pacer: Arc<dyn Pacer>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub input: Option<UserInput>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub turn: Turn,
    /// Offsets from the start of the batch at which each message should
    /// appear, in milliseconds.
    pub reveal_after_ms: Vec<u64>,
}

impl ChatResponse {
    fn new(session_id: String, turn: Turn) -> Self {
        let reveal_after_ms = reveal_schedule(&turn.messages)
            .into_iter()
            .map(|offset| offset.as_millis() as u64)
            .collect();
        Self {
            session_id,
            turn,
            reveal_after_ms,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .route("/session/{id}", get(get_session))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(correlation_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Middleware to add correlation ID to all requests
async fn correlation_id_middleware(mut request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        request.headers_mut().insert("x-correlation-id", value);
    }

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

fn status_for(error: &FlowError) -> StatusCode {
    match error {
        FlowError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        FlowError::UnexpectedInput { .. }
        | FlowError::UnknownOption { .. }
        | FlowError::InputClosed(_)
        | FlowError::NotAnalyzing(_) => StatusCode::CONFLICT,
        FlowError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let Some(session_id) = request.session_id else {
        if request.input.is_some() {
            warn!("Input sent without a session");
            return Err(StatusCode::BAD_REQUEST);
        }
        let (session_id, turn) = state.runner.start().await.map_err(|e| {
            error!(error = %e, "Failed to start session");
            status_for(&e)
        })?;
        return Ok(Json(ChatResponse::new(session_id, turn)));
    };

    if Uuid::parse_str(&session_id).is_err() {
        error!(session_id = %session_id, "Invalid session ID format");
        return Err(StatusCode::BAD_REQUEST);
    }
    let Some(input) = request.input else {
        warn!(session_id = %session_id, "Missing input");
        return Err(StatusCode::BAD_REQUEST);
    };

    let turn = state.runner.respond(&session_id, input).await.map_err(|e| {
        warn!(session_id = %session_id, error = %e, "Input rejected");
        status_for(&e)
    })?;

    if turn.status == TurnStatus::Analyzing {
        schedule_analysis(&state, session_id.clone());
    }

    info!(
        session_id = %session_id,
        step = %turn.step,
        status = ?turn.status,
        "Request completed successfully"
    );

    Ok(Json(ChatResponse::new(session_id, turn)))
}

/// Finish the analysis pause in the background; clients poll the session.
fn schedule_analysis(state: &AppState, session_id: String) {
    let runner = state.runner.clone();
    let pacer = state.pacer.clone();
    tokio::spawn(
        async move {
            match runner.run_analysis(&session_id, pacer.as_ref()).await {
                Ok(turn) => {
                    info!(session_id = %session_id, step = %turn.step, "Analysis delivered")
                }
                Err(e) => error!(session_id = %session_id, error = %e, "Analysis failed"),
            }
        }
        .in_current_span(),
    );
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    if Uuid::parse_str(&session_id).is_err() {
        error!(session_id = %session_id, "Invalid session ID format");
        return Err(StatusCode::BAD_REQUEST);
    }
    match state.runner.snapshot(&session_id).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            info!(session_id = %session_id, error = %e, "Session lookup failed");
            Err(status_for(&e))
        }
    }
}
