//! The AnalysisSuite runs a list of analyses against one index.
//!
//! Analyses are numbered by registration order, starting at 1.

use crate::analyses::*;
use crate::report::{Report, Section};
use crate::traits::Analysis;
use data_loader::CreditIndex;
use tracing::{debug, info, instrument};

/// Ordered collection of analyses.
///
/// ## Usage
/// ```ignore
/// let suite = AnalysisSuite::new()
///     .add(DirectorFilmography::new("Steven Spielberg"))
///     .add(BusiestActors);
///
/// let report = suite.run(&index);
/// print!("{}", report);
/// ```
pub struct AnalysisSuite {
    analyses: Vec<Box<dyn Analysis>>,
}

impl AnalysisSuite {
    /// Create a new empty AnalysisSuite.
    pub fn new() -> Self {
        Self {
            analyses: Vec::new(),
        }
    }

    /// The twenty standard analyses with their default subjects
    pub fn standard() -> Self {
        Self::new()
            .add(DirectorFilmography::new("Steven Spielberg"))
            .add(CharacterList::new("Tom Hanks"))
            .add(LargestCasts)
            .add(BusiestActors)
            .add(Departments)
            .add(ComposerFilmography::new("Hans Zimmer"))
            .add(DirectorLookup)
            .add(SharedCastFilms::new("Brad Pitt", "George Clooney"))
            .add(DepartmentHeadcount::new("Camera"))
            .add(CastAndCrew::new("Titanic"))
            .add(InnerCircle::new("Quentin Tarantino"))
            .add(CoStarDuos)
            .add(VersatileCrew)
            .add(TripleThreats)
            .add(TwoStepsFrom::new("Kevin Bacon"))
            .add(DirectorReport)
            .add(DualRoleTalentReport)
            .add(SharedCollaborators::new("Martin Scorsese", "Christopher Nolan"))
            .add(DepartmentInfluenceReport)
            .add(CharacterArchetypes::new("Johnny Depp"))
    }

    /// Add an analysis to the suite (builder pattern).
    pub fn add(mut self, analysis: impl Analysis + 'static) -> Self {
        self.analyses.push(Box::new(analysis));
        self
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Numbered headers, for listing what the suite would run
    pub fn headers(&self) -> Vec<(usize, String)> {
        self.analyses
            .iter()
            .enumerate()
            .map(|(i, a)| (i + 1, a.header()))
            .collect()
    }

    /// Run every analysis in order.
    pub fn run(&self, index: &CreditIndex) -> Report {
        self.run_only(index, &[])
    }

    /// Run the analyses whose numbers appear in `numbers`, in suite order.
    ///
    /// An empty `numbers` selects everything. Unknown numbers are ignored.
    #[instrument(skip_all, fields(movies = index.len()))]
    pub fn run_only(&self, index: &CreditIndex, numbers: &[usize]) -> Report {
        let mut sections = Vec::new();
        for (i, analysis) in self.analyses.iter().enumerate() {
            let number = i + 1;
            if !numbers.is_empty() && !numbers.contains(&number) {
                continue;
            }

            let header = analysis.header();
            debug!("Running analysis {}: {}", number, header);
            let outcome = analysis.run(index);
            debug!(
                "Analysis {} done (empty: {})",
                number,
                outcome.is_empty()
            );

            sections.push(Section {
                number,
                header,
                limit: analysis.limit(),
                outcome,
            });
        }
        info!("Ran {} analyses", sections.len());
        Report { sections }
    }
}

impl Default for AnalysisSuite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Limit, Outcome};

    #[test]
    fn test_empty_suite() {
        let suite = AnalysisSuite::new();
        let report = suite.run(&CreditIndex::new());
        assert!(report.sections.is_empty());
    }

    #[test]
    fn test_standard_suite_has_twenty() {
        let suite = AnalysisSuite::standard();
        assert_eq!(suite.len(), 20);
        let headers = suite.headers();
        assert_eq!(headers[0], (1, "Films directed by Steven Spielberg".to_string()));
        assert_eq!(headers[14], (15, "Actors two steps from Kevin Bacon".to_string()));
    }

    #[test]
    fn test_run_only_selected() {
        let suite = AnalysisSuite::standard();
        let report = suite.run_only(&CreditIndex::new(), &[9, 4, 99]);
        let numbers: Vec<usize> = report.sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![4, 9]);
        assert_eq!(report.sections[0].limit, Limit::Top(10));
        assert_eq!(report.sections[1].outcome, Outcome::Scalar("0".to_string()));
    }
}
