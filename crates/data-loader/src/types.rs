//! Core domain types for the movie credits dataset.
//!
//! This module defines the records every row is parsed into and the
//! read-only index that owns them for the rest of the run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the `movie_id` column)
pub type MovieId = u32;

/// Job title that marks a crew entry as the film's director
pub const DIRECTOR_JOB: &str = "Director";

/// Placeholder used wherever an expected name is absent
pub const UNKNOWN: &str = "Unknown";

// =============================================================================
// Credit Records
// =============================================================================

/// A performer's appearance in one movie.
///
/// Person identity is the exact `name` string; no normalization happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    /// Role played; may be empty
    pub character: String,
}

/// A behind-the-camera contribution to one movie.
///
/// One person may hold several jobs on the same film, producing several
/// entries that share `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    /// Broad category, e.g. "Camera", "Sound", "Directing"
    pub department: String,
    /// Specific role within the department, e.g. "Director", "Producer"
    pub job: String,
}

/// One row of the dataset: a film with its cast and crew lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCredit {
    pub movie_id: MovieId,
    /// Not unique across records (remakes share titles)
    pub title: String,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl MovieCredit {
    /// Name of the first crew entry whose job is `Director`, if any
    pub fn director(&self) -> Option<&str> {
        self.crew
            .iter()
            .find(|c| c.job == DIRECTOR_JOB)
            .map(|c| c.name.as_str())
    }

    /// True when `name` appears anywhere in the cast
    pub fn has_cast_member(&self, name: &str) -> bool {
        self.cast.iter().any(|c| c.name == name)
    }

    /// True when some crew entry matches both `name` and `job`
    pub fn has_crew_role(&self, name: &str, job: &str) -> bool {
        self.crew.iter().any(|c| c.name == name && c.job == job)
    }
}

// =============================================================================
// CreditIndex - The Read-Only Snapshot
// =============================================================================

/// Holds every parsed `MovieCredit` in source order plus an id lookup.
///
/// Built once at load time and only borrowed afterwards; queries take
/// `&CreditIndex` so nothing can mutate it mid-run.
#[derive(Debug)]
pub struct CreditIndex {
    pub(crate) credits: Vec<MovieCredit>,
    /// Position of each movie inside `credits`
    pub(crate) positions: HashMap<MovieId, usize>,
}

impl CreditIndex {
    /// Creates a new, empty CreditIndex
    pub fn new() -> Self {
        Self {
            credits: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// All movies in source row order
    pub fn credits(&self) -> &[MovieCredit] {
        &self.credits
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieCredit> {
        self.positions.get(&id).map(|&pos| &self.credits[pos])
    }

    pub fn len(&self) -> usize {
        self.credits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credits.is_empty()
    }

    /// Movie, cast entry and crew entry counts, for logging
    pub fn counts(&self) -> (usize, usize, usize) {
        let cast = self.credits.iter().map(|mc| mc.cast.len()).sum();
        let crew = self.credits.iter().map(|mc| mc.crew.len()).sum();
        (self.credits.len(), cast, crew)
    }

    /// Director of a movie, falling back to `"Unknown"`
    pub fn director_of<'a>(&self, movie: &'a MovieCredit) -> &'a str {
        movie.director().unwrap_or(UNKNOWN)
    }
}

impl Default for CreditIndex {
    fn default() -> Self {
        Self::new()
    }
}
