//! Review session management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{GatewayError, Result};
use crate::json::SessionResponse;
use crate::session::SessionInfo;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session).get(list_sessions))
        .route("/sessions/:id", get(get_session).delete(delete_session))
}

async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let session = state.sessions.create_session()?;
    tracing::info!(session = %session.id, "Created review session");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            success: true,
            session: SessionInfo::from(session.as_ref()),
        }),
    ))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>> {
    let session = state
        .sessions
        .get_session(&id)
        .ok_or(GatewayError::SessionNotFound(id))?;

    Ok(Json(SessionResponse {
        success: true,
        session: SessionInfo::from(session.as_ref()),
    }))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    if state.sessions.delete_session(&id) {
        Ok(Json(json!({
            "success": true,
            "message": "Session deleted"
        })))
    } else {
        Err(GatewayError::SessionNotFound(id))
    }
}

async fn list_sessions(State(state): State<AppState>) -> Json<Value> {
    let sessions = state.sessions.list_sessions();

    Json(json!({
        "success": true,
        "count": sessions.len(),
        "sessions": sessions,
        "max": state.config.max_sessions,
    }))
}
