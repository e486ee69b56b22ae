//! # Data Loader Crate
//!
//! This crate loads a movie credits CSV into a read-only in-memory index.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieCredit, CastMember, CrewMember, CreditIndex)
//! - **parser**: Parse CSV rows and their embedded JSON cast/crew lists
//! - **index**: Build the index, locate the dataset, derive lookups
//! - **error**: Error types for discovery and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{discover_dataset, CreditIndex};
//! use std::path::Path;
//!
//! let path = discover_dataset(Path::new("."))?;
//! let index = CreditIndex::load_from_file(&path)?;
//!
//! let movie = index.get_movie(19995).unwrap();
//! println!("{} has {} cast members", movie.title, movie.cast.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::discover_dataset;
pub use parser::{parse_credits, parse_credits_file, parse_credits_str};
pub use types::{
    // Type aliases and constants
    MovieId,
    DIRECTOR_JOB,
    UNKNOWN,
    // Core types
    CastMember,
    CrewMember,
    MovieCredit,
    CreditIndex,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_index_creation() {
        // Test that we can create an empty CreditIndex
        let index = CreditIndex::new();
        let (movies, cast, crew) = index.counts();

        assert_eq!(movies, 0);
        assert_eq!(cast, 0);
        assert_eq!(crew, 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_parse_then_index() {
        let text = "movie_id,title,cast,crew\n\
                    1,One,[],[]\n\
                    2,Two,[],[]\n";
        let index = CreditIndex::from_credits(parse_credits_str(text).unwrap()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get_movie(2).unwrap().title, "Two");
    }

    #[test]
    fn test_empty_queries() {
        let index = CreditIndex::new();

        // Querying non-existent data should return None or empty collections
        assert!(index.get_movie(999).is_none());
        assert!(index.credits().is_empty());
        assert!(index.director_lookup().is_empty());
    }
}
