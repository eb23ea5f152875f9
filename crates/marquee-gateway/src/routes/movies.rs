//! Catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use marquee_core::{MovieRecord, SearchQuery};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{GatewayError, Result};
use crate::json::{MovieListResponse, SearchResponse};
use crate::AppState;

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/search", get(search_movies))
        .route("/movies/:id", get(get_movie))
        .route("/genres", get(list_genres))
}

async fn list_movies(State(state): State<AppState>) -> Json<MovieListResponse> {
    info!("Fetching movies");

    Json(MovieListResponse {
        movies: state.catalog.list_all().to_vec(),
        genres: genres(&state),
    })
}

/// Raw search parameters as sent by a search form.
///
/// Form fields left empty arrive as `id=`, so the id is taken as text and an
/// empty or blank value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchParams {
    /// Convert to a catalog query, rejecting ids that are not integers.
    pub fn into_query(self) -> Result<SearchQuery> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                GatewayError::InvalidRequest(format!("movie id '{}' is not a number", raw))
            })?),
        };

        Ok(SearchQuery {
            name: self.name,
            id,
            genre: self.genre,
        })
    }
}

/// Search by name, id and genre.
///
/// The catalog ignores non-positive ids, but at this endpoint they are a
/// client mistake and get a 400.
async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<SearchResponse>)> {
    info!(
        name = ?params.name,
        id = ?params.id,
        genre = ?params.genre,
        "Searching movies"
    );
    let query = params.into_query()?;

    if let Some(id) = query.id.filter(|id| *id <= 0) {
        warn!(id, "Invalid movie id in search");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(SearchResponse::invalid(
                "Movie id must be a positive number",
            )),
        ));
    }

    let movies: Vec<MovieRecord> = state.catalog.search(&query).into_iter().cloned().collect();
    info!(results = movies.len(), "Search complete");
    Ok((StatusCode::OK, Json(SearchResponse::found(movies, &query))))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MovieRecord>> {
    info!(id, "Fetching movie details");

    match state.catalog.get_by_id(Some(id)) {
        Some(movie) => Ok(Json(movie.clone())),
        None => {
            warn!(id, "Movie not found");
            Err(GatewayError::MovieNotFound(id))
        }
    }
}

async fn list_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(genres(&state))
}

fn genres(state: &AppState) -> Vec<String> {
    state
        .catalog
        .list_genres()
        .into_iter()
        .map(str::to_string)
        .collect()
}
