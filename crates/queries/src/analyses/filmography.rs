//! Per-person film lists.
//!
//! Analyses that answer "which films did this person work on" for a
//! crew role, a cast appearance, or a pair of actors.

use crate::primitives::filter_by_person_and_role;
use crate::report::Outcome;
use crate::traits::Analysis;
use data_loader::{CreditIndex, DIRECTOR_JOB, MovieCredit};

/// Job title used for film composers in the credits
pub const COMPOSER_JOB: &str = "Original Music Composer";

/// Titles of films where `name` is credited with `job`
pub fn titles_by_crew_role<'a>(credits: &'a [MovieCredit], name: &str, job: &str) -> Vec<&'a str> {
    filter_by_person_and_role(credits, name, job)
        .map(|mc| mc.title.as_str())
        .collect()
}

/// (title, character) for every appearance of `actor`
///
/// An actor credited twice in one film yields two entries.
pub fn characters_played<'a>(credits: &'a [MovieCredit], actor: &str) -> Vec<(&'a str, &'a str)> {
    credits
        .iter()
        .flat_map(|mc| {
            mc.cast
                .iter()
                .filter(move |c| c.name == actor)
                .map(move |c| (mc.title.as_str(), c.character.as_str()))
        })
        .collect()
}

/// Titles of films whose cast contains both actors
pub fn shared_cast_titles<'a>(
    credits: &'a [MovieCredit],
    first: &str,
    second: &str,
) -> Vec<&'a str> {
    credits
        .iter()
        .filter(|mc| mc.has_cast_member(first) && mc.has_cast_member(second))
        .map(|mc| mc.title.as_str())
        .collect()
}

fn lines<'a>(values: impl IntoIterator<Item = &'a str>) -> Outcome {
    Outcome::Lines(values.into_iter().map(str::to_string).collect())
}

/// Films a person directed
pub struct DirectorFilmography {
    director: String,
}

impl DirectorFilmography {
    pub fn new(director: impl Into<String>) -> Self {
        Self {
            director: director.into(),
        }
    }
}

impl Analysis for DirectorFilmography {
    fn header(&self) -> String {
        format!("Films directed by {}", self.director)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        lines(titles_by_crew_role(index.credits(), &self.director, DIRECTOR_JOB))
    }
}

/// Films a person scored
pub struct ComposerFilmography {
    composer: String,
}

impl ComposerFilmography {
    pub fn new(composer: impl Into<String>) -> Self {
        Self {
            composer: composer.into(),
        }
    }
}

impl Analysis for ComposerFilmography {
    fn header(&self) -> String {
        format!("Films scored by {}", self.composer)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        lines(titles_by_crew_role(index.credits(), &self.composer, COMPOSER_JOB))
    }
}

/// Characters an actor played, one line per appearance
pub struct CharacterList {
    actor: String,
}

impl CharacterList {
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
        }
    }
}

impl Analysis for CharacterList {
    fn header(&self) -> String {
        format!("Characters played by {}", self.actor)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            characters_played(index.credits(), &self.actor)
                .into_iter()
                .map(|(title, character)| format!("{}: {}", title, character))
                .collect(),
        )
    }
}

/// Films two actors appeared in together
pub struct SharedCastFilms {
    first: String,
    second: String,
}

impl SharedCastFilms {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Analysis for SharedCastFilms {
    fn header(&self) -> String {
        format!("Films featuring both {} and {}", self.first, self.second)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        lines(shared_cast_titles(index.credits(), &self.first, &self.second))
    }
}
