//! CreditIndex building, dataset discovery and lookups.
//!
//! - Locate the dataset file (explicit path or a single `.csv` in a directory)
//! - Parse it and build the id index
//! - Derive lookups such as movie id -> director

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl CreditIndex {
    /// Load a credits CSV and build the index
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie credits from {:?}", path);

        let credits = parser::parse_credits_file(path)?;
        let index = Self::from_credits(credits)?;

        let (movies, cast, crew) = index.counts();
        info!(
            "Loaded {} movies, {} cast entries, {} crew entries",
            movies, cast, crew
        );
        Ok(index)
    }

    /// Build an index from already parsed credits
    ///
    /// Source order is kept. A repeated `movie_id` is rejected rather than
    /// overwriting the earlier row.
    pub fn from_credits(credits: Vec<MovieCredit>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(credits.len());
        for (pos, movie) in credits.iter().enumerate() {
            if positions.insert(movie.movie_id, pos).is_some() {
                return Err(DataLoadError::DuplicateMovieId { id: movie.movie_id });
            }
        }
        Ok(Self { credits, positions })
    }

    /// Map every movie id to its director's name
    ///
    /// Movies without a `Director` crew entry map to `"Unknown"`.
    pub fn director_lookup(&self) -> HashMap<MovieId, String> {
        self.credits
            .iter()
            .map(|mc| (mc.movie_id, self.director_of(mc).to_string()))
            .collect()
    }
}

/// Find the single `.csv` dataset inside `dir`
///
/// Extension match is case-insensitive. Zero or several candidates are
/// both errors: choosing among several would depend on filesystem order.
pub fn discover_dataset(dir: &Path) -> Result<PathBuf> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv && path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();
    debug!("Dataset candidates in {:?}: {:?}", dir, candidates);

    match candidates.len() {
        0 => Err(DataLoadError::NoDatasetFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(DataLoadError::AmbiguousDataset {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}
