//! Dataset loading.
//!
//! A dataset is a JSON array of [`MovieRecord`] objects. Load faults are
//! reported as [`Error`] by the `load_*` functions; [`Catalog::load_or_empty`]
//! logs them and falls back to an empty catalog.

use std::path::Path;

use tracing::{error, info};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::movie::MovieRecord;

/// Dataset compiled into the crate.
const BUNDLED_DATASET: &str = include_str!("../data/movies.json");

/// Parse a dataset from a JSON string.
pub fn load_from_str(json: &str) -> Result<Vec<MovieRecord>, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a dataset file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<MovieRecord>, Error> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content)
}

/// Parse the dataset shipped with the crate.
pub fn bundled_dataset() -> Result<Vec<MovieRecord>, Error> {
    load_from_str(BUNDLED_DATASET)
}

impl Catalog {
    /// Build a catalog from a loader result.
    ///
    /// A failed load is logged and yields an empty, still queryable catalog.
    pub fn from_load_result(result: Result<Vec<MovieRecord>, Error>) -> Self {
        match result {
            Ok(movies) => {
                info!(movies = movies.len(), "Loaded movie catalog");
                Catalog::new(movies)
            }
            Err(e) => {
                error!(error = %e, "Failed to load movies, starting with an empty catalog");
                Catalog::empty()
            }
        }
    }

    /// Load the dataset at `path`, or the bundled dataset when `path` is `None`.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_load_result(load_from_path(path)),
            None => Self::from_load_result(bundled_dataset()),
        }
    }
}
