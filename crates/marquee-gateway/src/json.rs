//! JSON response bodies.

use marquee_core::{MovieRecord, SearchQuery};
use serde::Serialize;

use crate::reviews::Review;
use crate::session::SessionInfo;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Number of movies in the loaded catalog.
    pub movies: usize,
    pub sessions: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct SessionStats {
    pub active: usize,
    pub max: usize,
}

/// Full listing used by the catalog page.
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieRecord>,
    pub genres: Vec<String>,
}

/// Search endpoint response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub movies: Vec<MovieRecord>,
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<SearchCriteria>,
}

impl SearchResponse {
    /// Successful search over `movies`.
    pub fn found(movies: Vec<MovieRecord>, query: &SearchQuery) -> Self {
        let message = match movies.len() {
            0 => "No movies found matching your search criteria".to_string(),
            1 => "Found 1 movie matching your search".to_string(),
            n => format!("Found {} movies matching your search", n),
        };

        Self {
            success: true,
            message,
            total_results: movies.len(),
            movies,
            search_criteria: Some(SearchCriteria::from(query)),
        }
    }

    /// Rejected search with no results.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            movies: Vec::new(),
            total_results: 0,
            search_criteria: None,
        }
    }
}

/// Echo of the criteria a search ran with.
#[derive(Debug, Serialize)]
pub struct SearchCriteria {
    pub name: String,
    pub id: Option<i64>,
    pub genre: String,
}

impl From<&SearchQuery> for SearchCriteria {
    fn from(query: &SearchQuery) -> Self {
        Self {
            name: query.name.clone().unwrap_or_default(),
            id: query.id,
            genre: query.genre.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: SessionInfo,
}

/// Reviews shown on a movie's detail view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListResponse {
    pub success: bool,
    pub movie_id: i64,
    pub reviews: Vec<Review>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReviewCreatedResponse {
    pub success: bool,
    pub message: String,
    pub review: Review,
}
