//! Core trait for the analyses.
//!
//! This module defines the Analysis trait that lets the suite hold
//! heterogeneous queries behind one interface.

use crate::report::{Limit, Outcome};
use data_loader::CreditIndex;

/// One read-only question asked of the credit index.
///
/// ## Design Note
/// - `run` borrows the index immutably; analyses never mutate it
/// - Analyses are total: an empty index or an unknown person yields an
///   empty `Outcome`, never an error
/// - `Send + Sync` so a suite can be shared across threads if callers want to
pub trait Analysis: Send + Sync {
    /// Header shown above the results, without numbering
    fn header(&self) -> String;

    /// How many result lines to show (default: all)
    fn limit(&self) -> Limit {
        Limit::Unbounded
    }

    /// Compute the full, ordered result
    fn run(&self, index: &CreditIndex) -> Outcome;
}
