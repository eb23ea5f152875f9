//! Stored reviews and the pre-seeded review set.

use std::collections::HashMap;

use marquee_core::ReviewCandidate;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Pre-seeded reviews compiled into the gateway.
const BUNDLED_REVIEWS: &str = include_str!("../data/reviews.json");

/// A review attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: i64,
    pub author_name: String,
    pub rating: i64,
    pub comment: String,
}

impl Review {
    /// Build a stored review from a candidate that already passed validation.
    pub fn from_accepted(movie_id: i64, candidate: ReviewCandidate) -> Self {
        Self {
            movie_id,
            author_name: candidate.author_name.unwrap_or_default().trim().to_string(),
            rating: candidate.rating,
            comment: candidate.comment.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Reviews shown for every visitor, grouped by movie id.
#[derive(Debug, Clone, Default)]
pub struct SeededReviews {
    by_movie: HashMap<i64, Vec<Review>>,
}

impl SeededReviews {
    pub fn new(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    /// Parse the bundled review set, falling back to no reviews.
    pub fn bundled() -> Self {
        match serde_json::from_str::<Vec<Review>>(BUNDLED_REVIEWS) {
            Ok(reviews) => Self::new(reviews),
            Err(e) => {
                error!(error = %e, "Failed to parse seeded reviews");
                Self::default()
            }
        }
    }

    /// Seeded reviews for one movie, in file order.
    pub fn for_movie(&self, movie_id: i64) -> &[Review] {
        self.by_movie
            .get(&movie_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
