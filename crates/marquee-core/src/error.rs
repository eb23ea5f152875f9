//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a movie dataset.
///
/// Query and validation operations never fail; these only surface from the
/// [`loader`](crate::loader) functions.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset content is not a valid array of movie records.
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}
