//! Error types for the data-loader crate.
//!
//! Two families of failure exist:
//! - discovery errors, raised before any byte of the dataset is read
//! - parse errors, raised while turning CSV rows into `MovieCredit` records
//!
//! Both are fatal for a run; the caller reports them once and exits.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur during dataset discovery, loading and parsing
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// No candidate `.csv` file in the scanned directory
    #[error("No .csv dataset found in {}", .dir.display())]
    NoDatasetFound { dir: PathBuf },

    /// More than one candidate `.csv` file; picking one would be arbitrary
    #[error(
        "Found {} .csv datasets in {}, pass one explicitly: {}",
        .candidates.len(),
        .dir.display(),
        display_paths(.candidates)
    )]
    AmbiguousDataset {
        dir: PathBuf,
        candidates: Vec<PathBuf>,
    },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV layer itself rejected the input (bad quoting, ragged rows)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a column the parser needs
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Row in the dataset couldn't be parsed
    ///
    /// Stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// Two rows share a movie id
    #[error("Duplicate movie id {id}")]
    DuplicateMovieId { id: MovieId },
}

impl DataLoadError {
    /// True for the variants raised while locating the dataset, before parsing
    pub fn is_discovery(&self) -> bool {
        matches!(
            self,
            DataLoadError::NoDatasetFound { .. }
                | DataLoadError::AmbiguousDataset { .. }
                | DataLoadError::FileNotFound { .. }
        )
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
