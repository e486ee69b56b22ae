//! Analyses that cross the cast/crew boundary or compare filmographies.

use crate::primitives::{collaborators_of, crew_with_parent, distinct, group_and_rank, intersect};
use crate::report::{Limit, Outcome};
use crate::traits::Analysis;
use data_loader::{CreditIndex, MovieCredit, UNKNOWN};
use std::collections::{HashMap, HashSet};

/// Names credited in both the cast and the crew of `movie`
///
/// Distinct, in cast order.
pub fn cast_and_crew_of(movie: &MovieCredit) -> Vec<&str> {
    let crew: HashSet<&str> = movie.crew.iter().map(|c| c.name.as_str()).collect();
    distinct(
        movie
            .cast
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| crew.contains(name)),
    )
}

/// A person credited on both sides of the camera, with the department
/// they most often worked in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualRoleTalent<'a> {
    pub name: &'a str,
    pub top_department: &'a str,
}

/// People who acted and crewed on the same film, first-seen order
///
/// `top_department` is the department of most crew entries across the whole
/// collection; ties go to the department seen first.
pub fn dual_role_talent(credits: &[MovieCredit]) -> Vec<DualRoleTalent<'_>> {
    let names = distinct(credits.iter().flat_map(cast_and_crew_of));
    if names.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = names.iter().copied().collect();
    let mut departments: HashMap<&str, Vec<&str>> = HashMap::new();
    for (_, c) in crew_with_parent(credits) {
        if wanted.contains(c.name.as_str()) {
            departments
                .entry(c.name.as_str())
                .or_default()
                .push(c.department.as_str());
        }
    }

    names
        .into_iter()
        .map(|name| {
            let top_department = departments
                .get(name)
                .and_then(|depts| {
                    group_and_rank(depts.iter().copied(), |d| *d)
                        .first()
                        .map(|g| g.key)
                })
                .unwrap_or(UNKNOWN);
            DualRoleTalent {
                name,
                top_department,
            }
        })
        .collect()
}

/// Movie id to director, one line per movie in source order
pub struct DirectorLookup;

impl Analysis for DirectorLookup {
    fn header(&self) -> String {
        "Director by movie id".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(10)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let lookup = index.director_lookup();
        Outcome::Lines(
            index
                .credits()
                .iter()
                .map(|mc| {
                    let director = lookup.get(&mc.movie_id).map(String::as_str).unwrap_or(UNKNOWN);
                    format!("{}: {}", mc.movie_id, director)
                })
                .collect(),
        )
    }
}

/// People in both cast and crew of every film with a given title
pub struct CastAndCrew {
    title: String,
}

impl CastAndCrew {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Analysis for CastAndCrew {
    fn header(&self) -> String {
        format!("People in both cast and crew of {}", self.title)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            index
                .credits()
                .iter()
                .filter(|mc| mc.title == self.title)
                .flat_map(cast_and_crew_of)
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Actors who also crewed on one of their films
pub struct DualRoleTalentReport;

impl Analysis for DualRoleTalentReport {
    fn header(&self) -> String {
        "People in cast and crew of the same film".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(15)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            dual_role_talent(index.credits())
                .into_iter()
                .map(|t| format!("{}: {}", t.name, t.top_department))
                .collect(),
        )
    }
}

/// People who worked with both of two directors
pub struct SharedCollaborators {
    first: String,
    second: String,
}

impl SharedCollaborators {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Analysis for SharedCollaborators {
    fn header(&self) -> String {
        format!("Worked with both {} and {}", self.first, self.second)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let first = collaborators_of(index.credits(), &self.first);
        let second = collaborators_of(index.credits(), &self.second);
        Outcome::Lines(intersect(&first, &second).into_iter().map(str::to_string).collect())
    }
}
