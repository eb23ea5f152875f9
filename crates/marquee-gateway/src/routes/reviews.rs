//! Review listing and submission.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use marquee_core::{validate, ReviewCandidate};
use tracing::{info, warn};

use crate::error::{GatewayError, Result};
use crate::json::{ReviewCreatedResponse, ReviewListResponse};
use crate::reviews::Review;
use crate::session::Session;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/sessions/:session_id/movies/:movie_id/reviews",
        get(list_reviews).post(submit_review),
    )
}

/// Resolve the movie and session a review path refers to.
fn resolve(state: &AppState, session_id: String, movie_id: i64) -> Result<Arc<Session>> {
    if state.catalog.get_by_id(Some(movie_id)).is_none() {
        return Err(GatewayError::MovieNotFound(movie_id));
    }
    state
        .sessions
        .get_session(&session_id)
        .ok_or(GatewayError::SessionNotFound(session_id))
}

/// Seeded reviews first, then this session's submissions.
async fn list_reviews(
    State(state): State<AppState>,
    Path((session_id, movie_id)): Path<(String, i64)>,
) -> Result<Json<ReviewListResponse>> {
    let session = resolve(&state, session_id, movie_id)?;

    let mut reviews = state.seeded_reviews.for_movie(movie_id).to_vec();
    reviews.extend(session.reviews_for(movie_id));

    Ok(Json(ReviewListResponse {
        success: true,
        movie_id,
        count: reviews.len(),
        reviews,
    }))
}

async fn submit_review(
    State(state): State<AppState>,
    Path((session_id, movie_id)): Path<(String, i64)>,
    Json(candidate): Json<ReviewCandidate>,
) -> Result<(StatusCode, Json<ReviewCreatedResponse>)> {
    let session = resolve(&state, session_id, movie_id)?;

    if let Err(rule) = validate(&candidate).into_result() {
        warn!(movie_id, session = %session.id, reason = %rule, "Review rejected");
        return Err(rule.into());
    }

    let review = Review::from_accepted(movie_id, candidate);
    session.add_review(review.clone());
    info!(movie_id, session = %session.id, rating = review.rating, "Review added");

    Ok((
        StatusCode::CREATED,
        Json(ReviewCreatedResponse {
            success: true,
            message: "Review added".to_string(),
            review,
        }),
    ))
}
