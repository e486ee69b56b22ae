//! Cast-side rankings and graph queries.
//!
//! ## Algorithms
//! - Largest casts: stable sort of movies by cast length
//! - Busiest actors: group every cast entry by name, rank by count
//! - Co-star duos: per-movie distinct pairs, ranked by shared films
//! - Two steps away: two set expansions over the co-appearance graph
//! - Character archetypes: group one actor's roles by the first word

use crate::primitives::{
    CastPair, Group, cast_with_parent, co_star_pairs, group_and_rank, two_steps_from,
};
use crate::report::{Limit, Outcome};
use crate::traits::Analysis;
use data_loader::{CastMember, CreditIndex, MovieCredit, UNKNOWN};

/// Movies ordered by cast size, largest first, ties in source order
pub fn movies_by_cast_size(credits: &[MovieCredit]) -> Vec<&MovieCredit> {
    let mut movies: Vec<&MovieCredit> = credits.iter().collect();
    movies.sort_by(|a, b| b.cast.len().cmp(&a.cast.len()));
    movies
}

/// Cast entries grouped by actor name, most entries first
pub fn actor_appearances(credits: &[MovieCredit]) -> Vec<Group<&str, &MovieCredit>> {
    group_and_rank(cast_with_parent(credits), |(_, c)| c.name.as_str())
        .into_iter()
        .map(|g| Group {
            key: g.key,
            members: g.members.into_iter().map(|(mc, _)| mc).collect(),
        })
        .collect()
}

/// Co-star pairs ranked by the number of films they shared
pub fn ranked_duos(credits: &[MovieCredit]) -> Vec<Group<CastPair<'_>, &MovieCredit>> {
    crate::primitives::rank_by_count(co_star_pairs(credits))
}

/// First word of a character name, `"Unknown"` when there is none
pub fn archetype(character: &str) -> &str {
    character
        .split(' ')
        .next()
        .filter(|word| !word.is_empty())
        .unwrap_or(UNKNOWN)
}

/// One actor's roles grouped by archetype, most roles first
pub fn character_archetypes<'a>(
    credits: &'a [MovieCredit],
    actor: &str,
) -> Vec<Group<&'a str, &'a CastMember>> {
    let roles = cast_with_parent(credits)
        .map(|(_, c)| c)
        .filter(|c| c.name == actor);
    group_and_rank(roles, |c| archetype(&c.character))
}

/// Movies with the most credited actors
pub struct LargestCasts;

impl Analysis for LargestCasts {
    fn header(&self) -> String {
        "Movies with the largest cast".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(5)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let movies = self.limit().apply(movies_by_cast_size(index.credits()));
        Outcome::Lines(
            movies
                .into_iter()
                .map(|mc| format!("{}: {} actors", mc.title, mc.cast.len()))
                .collect(),
        )
    }
}

/// Actors with the most cast entries
pub struct BusiestActors;

impl Analysis for BusiestActors {
    fn header(&self) -> String {
        "Most credited actors".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(10)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let groups = self.limit().apply(actor_appearances(index.credits()));
        Outcome::Lines(
            groups
                .into_iter()
                .map(|g| format!("{}: {} films", g.key, g.count()))
                .collect(),
        )
    }
}

/// Pairs of actors who shared the most films
pub struct CoStarDuos;

impl Analysis for CoStarDuos {
    fn header(&self) -> String {
        "Most frequent co-star duos".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(10)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let duos = self.limit().apply(ranked_duos(index.credits()));
        Outcome::Lines(
            duos.into_iter()
                .map(|g| format!("{} & {}: {} films", g.key.first, g.key.second, g.count()))
                .collect(),
        )
    }
}

/// Actors exactly two co-appearances away from a person
pub struct TwoStepsFrom {
    person: String,
}

impl TwoStepsFrom {
    pub fn new(person: impl Into<String>) -> Self {
        Self {
            person: person.into(),
        }
    }
}

impl Analysis for TwoStepsFrom {
    fn header(&self) -> String {
        format!("Actors two steps from {}", self.person)
    }

    fn limit(&self) -> Limit {
        Limit::Top(15)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let hood = two_steps_from(index.credits(), &self.person);
        Outcome::Lines(hood.step_two.into_iter().map(str::to_string).collect())
    }
}

/// One actor's roles bucketed by the first word of the character
pub struct CharacterArchetypes {
    actor: String,
}

impl CharacterArchetypes {
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
        }
    }
}

impl Analysis for CharacterArchetypes {
    fn header(&self) -> String {
        format!("Character archetypes of {}", self.actor)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            character_archetypes(index.credits(), &self.actor)
                .into_iter()
                .map(|g| {
                    let characters: Vec<&str> =
                        g.members.iter().map(|c| c.character.as_str()).collect();
                    format!("{}: {} roles ({})", g.key, g.count(), characters.join(", "))
                })
                .collect(),
        )
    }
}
