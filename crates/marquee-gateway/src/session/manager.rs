use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::reviews::Review;

/// A visitor session holding the reviews it submitted
pub struct Session {
    pub id: String,
    pub created_at: Instant,
    last_activity: AtomicU64,
    reviews: RwLock<HashMap<i64, Vec<Review>>>,
}

impl Session {
    fn new(id: String) -> Self {
        Self {
            id,
            created_at: Instant::now(),
            last_activity: AtomicU64::new(Self::now_timestamp()),
            reviews: RwLock::new(HashMap::new()),
        }
    }

    fn now_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    pub fn touch(&self) {
        self.last_activity.store(Self::now_timestamp(), Ordering::SeqCst);
    }

    pub fn last_activity_secs(&self) -> u64 {
        self.last_activity.load(Ordering::SeqCst)
    }

    pub fn is_expired(&self, timeout: Duration) -> bool {
        let last = self.last_activity.load(Ordering::SeqCst);
        let now = Self::now_timestamp();
        now.saturating_sub(last) > timeout.as_secs()
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Append a review for a movie
    pub fn add_review(&self, review: Review) {
        self.reviews
            .write()
            .entry(review.movie_id)
            .or_default()
            .push(review);
    }

    /// Reviews this session submitted for a movie, oldest first
    pub fn reviews_for(&self, movie_id: i64) -> Vec<Review> {
        self.reviews
            .read()
            .get(&movie_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Total reviews submitted in this session
    pub fn review_count(&self) -> usize {
        self.reviews.read().values().map(Vec::len).sum()
    }
}

/// Manages all active sessions
pub struct SessionManager {
    sessions: DashMap<String, Arc<Session>>,
    /// Serializes the capacity check with the insert
    create_lock: Mutex<()>,
    config: GatewayConfig,
}

impl SessionManager {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            create_lock: Mutex::new(()),
            config,
        }
    }

    /// Create a new empty session
    pub fn create_session(&self) -> Result<Arc<Session>> {
        let _guard = self.create_lock.lock();
        if self.sessions.len() >= self.config.max_sessions {
            return Err(GatewayError::TooManySessions(self.config.max_sessions));
        }

        let session_id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(Session::new(session_id.clone()));
        self.sessions.insert(session_id, session.clone());

        Ok(session)
    }

    /// Get a session by ID, updating its last activity time
    pub fn get_session(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.get(id).map(|entry| {
            let session = entry.clone();
            session.touch();
            session
        })
    }

    pub fn has_session(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn delete_session(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Clean up expired sessions
    pub fn cleanup_expired(&self) -> usize {
        let timeout = self.config.session_timeout;
        let mut removed = 0;

        self.sessions.retain(|_, session| {
            let expired = session.is_expired(timeout);
            if expired {
                removed += 1;
            }
            !expired
        });

        removed
    }

    /// Get info about all sessions
    pub fn list_sessions(&self) -> Vec<SessionInfo> {
        self.sessions
            .iter()
            .map(|entry| SessionInfo::from(entry.value().as_ref()))
            .collect()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub age_secs: u64,
    pub idle_secs: u64,
    pub review_count: usize,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            age_secs: session.age().as_secs(),
            idle_secs: Session::now_timestamp().saturating_sub(session.last_activity_secs()),
            review_count: session.review_count(),
        }
    }
}

/// Background task to periodically clean up expired sessions
pub async fn cleanup_task(manager: Arc<SessionManager>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        let cleaned = manager.cleanup_expired();
        if cleaned > 0 {
            tracing::info!("Cleaned up {} expired sessions", cleaned);
        }
    }
}
