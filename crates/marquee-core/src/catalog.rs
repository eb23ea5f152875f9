//! In-memory movie catalog and its query operations.
//!
//! The catalog is built once from a loaded dataset and never mutated
//! afterwards, so every query takes `&self` and the type is `Send + Sync`.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use tracing::{debug, info};

use crate::movie::MovieRecord;

/// A single search predicate applied by [`Catalog::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieFilter {
    /// Case-insensitive substring match on the movie name.
    NameContains(String),
    /// Exact identifier match.
    IdEquals(i64),
    /// Case-insensitive substring match on the genre label.
    GenreContains(String),
}

impl MovieFilter {
    /// Returns `true` if the movie satisfies this predicate.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        match self {
            MovieFilter::NameContains(needle) => contains_ignore_ascii_case(&movie.name, needle),
            MovieFilter::IdEquals(id) => movie.id == *id,
            MovieFilter::GenreContains(needle) => {
                contains_ignore_ascii_case(&movie.genre, needle)
            }
        }
    }
}

impl fmt::Display for MovieFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieFilter::NameContains(needle) => write!(f, "name contains '{}'", needle),
            MovieFilter::IdEquals(id) => write!(f, "id = {}", id),
            MovieFilter::GenreContains(needle) => write!(f, "genre contains '{}'", needle),
        }
    }
}

/// Search criteria for [`Catalog::search`].
///
/// Every field is optional. Blank strings and non-positive ids are treated
/// the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub genre: Option<String>,
}

impl SearchQuery {
    /// Create an empty query that matches every movie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to names containing `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to the movie with this id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Restrict to genres containing `genre`.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The predicates this query actually applies, in evaluation order.
    ///
    /// Absent, blank, and non-positive criteria are dropped here.
    pub fn filters(&self) -> Vec<MovieFilter> {
        let mut filters = Vec::with_capacity(3);

        if let Some(name) = non_blank(self.name.as_deref()) {
            filters.push(MovieFilter::NameContains(name.to_string()));
        }
        if let Some(id) = self.id.filter(|id| *id > 0) {
            filters.push(MovieFilter::IdEquals(id));
        }
        if let Some(genre) = non_blank(self.genre.as_deref()) {
            filters.push(MovieFilter::GenreContains(genre.to_string()));
        }

        filters
    }
}

/// The load-once movie catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Records in load order.
    movies: Vec<MovieRecord>,
    /// Position of each id in `movies`.
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Build a catalog from records in load order.
    ///
    /// Ids are assumed unique; if they are not, the index points at the last
    /// record carrying a given id.
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        let by_id = movies
            .iter()
            .enumerate()
            .map(|(pos, movie)| (movie.id, pos))
            .collect();

        Self { movies, by_id }
    }

    /// A catalog with no movies.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of loaded movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie in load order.
    pub fn list_all(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Look up a movie by id.
    ///
    /// Returns `None` for an absent or non-positive id, or when no movie
    /// carries it.
    pub fn get_by_id(&self, id: Option<i64>) -> Option<&MovieRecord> {
        let id = id.filter(|id| *id > 0)?;
        self.by_id.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Conjunctive search over name, id, and genre.
    ///
    /// Starts from every movie and narrows by each applied predicate in turn.
    /// Survivors keep their load order. No match yields an empty vector.
    pub fn search(&self, query: &SearchQuery) -> Vec<&MovieRecord> {
        info!(
            name = ?query.name,
            id = ?query.id,
            genre = ?query.genre,
            "Searching catalog"
        );

        let mut results: Vec<&MovieRecord> = self.movies.iter().collect();
        for filter in query.filters() {
            results.retain(|movie| filter.matches(movie));
            debug!(filter = %filter, remaining = results.len(), "Applied search filter");
        }

        info!(results = results.len(), "Search complete");
        results
    }

    /// Distinct genre labels, sorted ascending.
    ///
    /// Distinctness is case-sensitive.
    pub fn list_genres(&self) -> Vec<&str> {
        self.movies
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Trim and drop empty input.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Substring test with ASCII-only case folding.
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
