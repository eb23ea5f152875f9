//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};

use crate::json::{HealthResponse, SessionStats};
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // an empty catalog means the dataset failed to load
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        service: "marquee-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        movies: state.catalog.len(),
        sessions: SessionStats {
            active: state.sessions.session_count(),
            max: state.config.max_sessions,
        },
    })
}
