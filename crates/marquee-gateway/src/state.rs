use std::sync::Arc;

use marquee_core::Catalog;

use crate::config::GatewayConfig;
use crate::reviews::SeededReviews;
use crate::session::SessionManager;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub seeded_reviews: Arc<SeededReviews>,
    pub sessions: Arc<SessionManager>,
    pub config: GatewayConfig,
}

impl AppState {
    pub fn new(catalog: Catalog, config: GatewayConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            seeded_reviews: Arc::new(SeededReviews::bundled()),
            sessions: Arc::new(SessionManager::new(config.clone())),
            config,
        }
    }

    /// Replace the pre-seeded reviews.
    pub fn with_seeded_reviews(mut self, seeded: SeededReviews) -> Self {
        self.seeded_reviews = Arc::new(seeded);
        self
    }
}
