use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marquee_core::ReviewRule;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Movie with ID {0} was not found")]
    MovieNotFound(i64),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Too many sessions (max: {0})")]
    TooManySessions(usize),

    #[error("{0}")]
    ReviewRejected(#[from] ReviewRule),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::MovieNotFound(_) => (StatusCode::NOT_FOUND, "MOVIE_NOT_FOUND"),
            GatewayError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            GatewayError::TooManySessions(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "TOO_MANY_SESSIONS")
            }
            GatewayError::ReviewRejected(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "REVIEW_REJECTED")
            }
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let body = Json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rejection_keeps_rule_message() {
        let err = GatewayError::from(ReviewRule::CommentMinWords);
        assert_eq!(err.to_string(), "Review must be at least 5 words");
        assert_eq!(
            err.status_and_code(),
            (StatusCode::UNPROCESSABLE_ENTITY, "REVIEW_REJECTED")
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = GatewayError::MovieNotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = GatewayError::SessionNotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = GatewayError::InvalidRequest("bad id".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
