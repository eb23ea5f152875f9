//! Movie record type.

use serde::{Deserialize, Serialize};

/// A single immutable movie entry in the catalog.
///
/// Serialized field names follow the dataset file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Unique positive identifier.
    pub id: i64,
    /// Display title.
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: i32,
    /// Genre label, possibly composite such as `Crime/Drama`.
    pub genre: String,
    pub description: String,
    /// Running time in minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// External aggregator score.
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

impl MovieRecord {
    /// Create a record with the given identity fields and empty details.
    pub fn new(id: i64, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            director: String::new(),
            year: 0,
            genre: genre.into(),
            description: String::new(),
            duration_minutes: 0,
            rating: 0.0,
        }
    }

    /// Set the director.
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the running time in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Set the aggregator rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}
