//! Analysis implementations.
//!
//! Each submodule exposes plain functions returning typed results, plus
//! small structs implementing `Analysis` that format those results for
//! the report.

pub mod cast;
pub mod crew;
pub mod crossover;
pub mod filmography;

// Re-export for convenience
pub use cast::{BusiestActors, CharacterArchetypes, CoStarDuos, LargestCasts, TwoStepsFrom};
pub use crew::{
    DepartmentHeadcount, DepartmentInfluenceReport, Departments, DirectorReport, InnerCircle,
    TripleThreats, VersatileCrew,
};
pub use crossover::{CastAndCrew, DirectorLookup, DualRoleTalentReport, SharedCollaborators};
pub use filmography::{CharacterList, ComposerFilmography, DirectorFilmography, SharedCastFilms};
