//! Marquee Core - Movie catalog queries and review validation.
//!
//! This crate provides the two pieces of Marquee with real logic: the
//! in-memory [`Catalog`] query engine and the review submission
//! [`validate`] rule chain. Both are read-only after construction and can be
//! shared freely between threads.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod movie;
pub mod review;

pub use catalog::{Catalog, MovieFilter, SearchQuery};
pub use error::Error;
pub use loader::{bundled_dataset, load_from_path, load_from_str};
pub use movie::MovieRecord;
pub use review::{
    count_words, validate, ReviewCandidate, ReviewRule, ValidationOutcome, MIN_COMMENT_WORDS,
    RULES,
};
