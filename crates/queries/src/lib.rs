//! Analytical queries over a loaded movie credits index.
//!
//! This crate provides:
//! - shared grouping, ranking and co-occurrence primitives
//! - the Analysis trait and twenty implementations of it
//! - AnalysisSuite for running analyses in order and collecting a Report
//!
//! ## Architecture
//! Every analysis borrows the `CreditIndex` read-only and is total: an empty
//! index or an unknown person gives an empty result, never an error. Ranked
//! results use stable sorts, so ties keep first-appearance order.
//!
//! ## Example Usage
//! ```ignore
//! use queries::AnalysisSuite;
//!
//! let index = CreditIndex::load_from_file(path)?;
//! let report = AnalysisSuite::standard().run(&index);
//! print!("{}", report);
//! ```

pub mod analyses;
pub mod primitives;
pub mod report;
pub mod suite;
pub mod traits;

// Re-export main types
pub use report::{Limit, Outcome, Report, Section};
pub use suite::AnalysisSuite;
pub use traits::Analysis;
