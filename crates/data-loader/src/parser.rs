//! Parser for movie credits CSV files.
//!
//! Expected layout (TMDB credits export):
//! - header row naming at least `movie_id`, `title`, `cast`, `crew`
//! - `cast` and `crew` cells hold JSON arrays of objects
//!
//! Any malformed row aborts the whole parse. Silently emptying a bad cell
//! would skew every aggregate computed later without a trace.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::StringRecord;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const MOVIE_ID_COLUMN: &str = "movie_id";
const TITLE_COLUMN: &str = "title";
const CAST_COLUMN: &str = "cast";
const CREW_COLUMN: &str = "crew";

/// Positions of the required columns inside each record
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    movie_id: usize,
    title: usize,
    cast: usize,
    crew: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            movie_id: find(MOVIE_ID_COLUMN)?,
            title: find(TITLE_COLUMN)?,
            cast: find(CAST_COLUMN)?,
            crew: find(CREW_COLUMN)?,
        })
    }
}

/// Parse a credits file from disk
pub fn parse_credits_file(path: &Path) -> Result<Vec<MovieCredit>> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_credits(file, &source)
}

/// Parse credits from in-memory CSV text
pub fn parse_credits_str(text: &str) -> Result<Vec<MovieCredit>> {
    parse_credits(text.as_bytes(), "<memory>")
}

/// Parse credits from any reader
///
/// `source` names the input in error messages.
///
/// The CSV layer runs sequentially (it has to, quoting spans lines), then
/// the JSON cells of all rows are decoded in parallel. `collect` into a
/// `Result<Vec<_>>` keeps source order and stops at the first bad row.
pub fn parse_credits<R: Read>(reader: R, source: &str) -> Result<Vec<MovieCredit>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DataLoadError::ParseError {
            file: source.to_string(),
            line: 1,
            reason: "Missing header row".to_string(),
        });
    }
    let layout = ColumnLayout::from_headers(&headers)?;

    // Blank lines never reach here; the csv reader drops them.
    let records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    records
        .par_iter()
        .map(|record| parse_row(record, &layout, source))
        .collect()
}

/// Convert one CSV record into a MovieCredit
fn parse_row(record: &StringRecord, layout: &ColumnLayout, source: &str) -> Result<MovieCredit> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let error = |reason: String| DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason,
    };
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| error(format!("Missing {}", name)))
    };

    let movie_id = field(layout.movie_id, MOVIE_ID_COLUMN)?;
    let title = field(layout.title, TITLE_COLUMN)?;
    let cast = field(layout.cast, CAST_COLUMN)?;
    let crew = field(layout.crew, CREW_COLUMN)?;

    Ok(MovieCredit {
        movie_id: movie_id
            .trim()
            .parse()
            .map_err(|e| error(format!("Invalid movie_id {:?}: {}", movie_id, e)))?,
        title: title.to_string(),
        cast: decode_list(cast).map_err(|e| error(format!("Invalid cast list: {}", e)))?,
        crew: decode_list(crew).map_err(|e| error(format!("Invalid crew list: {}", e)))?,
    })
}

/// Decode a serialized list cell
///
/// Example: `[{"name": "Tom Hanks", "character": "Woody"}]`
///
/// An empty cell is an empty list. Unknown keys inside the objects
/// (`credit_id`, `gender`, `order`, ...) are ignored.
fn decode_list<T: DeserializeOwned>(cell: &str) -> std::result::Result<Vec<T>, serde_json::Error> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(cell)
}
