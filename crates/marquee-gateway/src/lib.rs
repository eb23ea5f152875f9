//! Marquee HTTP/JSON Gateway.
//!
//! This crate exposes the movie catalog and review submission over a small
//! REST API:
//! - Catalog listing, search, detail and genre endpoints
//! - Session-scoped review lists merged with pre-seeded reviews
//! - Review validation before anything is stored

pub mod config;
pub mod error;
pub mod json;
pub mod reviews;
pub mod routes;
pub mod session;
pub mod state;

pub use config::{Args, GatewayConfig};
pub use error::GatewayError;
pub use state::AppState;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::movies::routes())
        .merge(routes::sessions::routes())
        .merge(routes::reviews::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
