//! Building blocks shared by the analyses.
//!
//! Everything here borrows from the credit slice and never allocates new
//! name strings; results hold `&str` views into the loaded records.
//!
//! Ordering rule used throughout: groups and distinct values come out in
//! order of first appearance, and ranking uses stable sorts only, so ties
//! keep that order.

use data_loader::{CastMember, CrewMember, MovieCredit};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

// =============================================================================
// Named Keys
// =============================================================================

/// Grouping key for "person within a department"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonDepartment<'a> {
    pub name: &'a str,
    pub department: &'a str,
}

/// Unordered pair of distinct cast names, stored with `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> CastPair<'a> {
    /// None when both names are the same person
    pub fn new(a: &'a str, b: &'a str) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// =============================================================================
// Filtering and Flattening
// =============================================================================

/// Movies where some crew entry matches `name` and `job` exactly
pub fn filter_by_person_and_role<'a>(
    credits: &'a [MovieCredit],
    name: &str,
    job: &str,
) -> impl Iterator<Item = &'a MovieCredit> {
    credits.iter().filter(move |mc| mc.has_crew_role(name, job))
}

/// Every cast entry paired with its movie
pub fn cast_with_parent(
    credits: &[MovieCredit],
) -> impl Iterator<Item = (&MovieCredit, &CastMember)> {
    credits
        .iter()
        .flat_map(|mc| mc.cast.iter().map(move |c| (mc, c)))
}

/// Every crew entry paired with its movie
pub fn crew_with_parent(
    credits: &[MovieCredit],
) -> impl Iterator<Item = (&MovieCredit, &CrewMember)> {
    credits
        .iter()
        .flat_map(|mc| mc.crew.iter().map(move |c| (mc, c)))
}

/// Distinct values in order of first appearance
pub fn distinct<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

// =============================================================================
// Grouping and Ranking
// =============================================================================

/// Items sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Group items by key, groups ordered by first appearance of their key
pub fn group_by_first_seen<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match slots.get(&key).copied() {
            Some(slot) => groups[slot].members.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![item],
                });
            }
        }
    }
    groups
}

/// Largest groups first; equal sizes keep their relative order
pub fn rank_by_count<K, T>(mut groups: Vec<Group<K, T>>) -> Vec<Group<K, T>> {
    groups.sort_by(|a, b| b.count().cmp(&a.count()));
    groups
}

/// `group_by_first_seen` followed by `rank_by_count`
pub fn group_and_rank<I, K, F>(items: I, key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    rank_by_count(group_by_first_seen(items, key_fn))
}

/// Stable descending sort on a floating point score
pub fn rank_by_score<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}

/// Arithmetic mean, 0.0 for no values
pub fn mean<I: IntoIterator<Item = usize>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0usize, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

// =============================================================================
// Co-occurrence
// =============================================================================

/// Co-star pairs across the collection, grouped by pair
///
/// Within one movie each pair is produced once, so a group's members are
/// the distinct movies the two shared. Groups follow first appearance.
pub fn co_star_pairs(credits: &[MovieCredit]) -> Vec<Group<CastPair<'_>, &MovieCredit>> {
    let pairs = credits.iter().flat_map(|mc| {
        let names = distinct(mc.cast.iter().map(|c| c.name.as_str()));
        let mut movie_pairs = Vec::new();
        for &a in &names {
            for &b in &names {
                if a < b {
                    movie_pairs.extend(CastPair::new(a, b).map(|pair| (pair, mc)));
                }
            }
        }
        movie_pairs
    });

    group_by_first_seen(pairs, |(pair, _)| *pair)
        .into_iter()
        .map(|g| Group {
            key: g.key,
            members: g.members.into_iter().map(|(_, mc)| mc).collect(),
        })
        .collect()
}

/// Everyone sharing a cast list with at least one of `people`
///
/// Includes `people` themselves when they appear; callers subtract.
pub fn co_stars_of<'a>(credits: &'a [MovieCredit], people: &HashSet<&str>) -> Vec<&'a str> {
    distinct(
        credits
            .iter()
            .filter(|mc| mc.cast.iter().any(|c| people.contains(c.name.as_str())))
            .flat_map(|mc| mc.cast.iter().map(|c| c.name.as_str())),
    )
}

/// Result of a radius-2 expansion over the co-appearance graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbourhood<'a> {
    /// Direct co-stars, excluding the root
    pub step_one: Vec<&'a str>,
    /// Co-stars of co-stars, excluding the root and step one
    pub step_two: Vec<&'a str>,
}

/// People exactly one and exactly two co-appearances away from `person`
///
/// Two explicit set expansions; repeated meetings collapse through set
/// membership and are never counted.
pub fn two_steps_from<'a>(credits: &'a [MovieCredit], person: &str) -> Neighbourhood<'a> {
    let root: HashSet<&str> = HashSet::from([person]);
    let step_one: Vec<&str> = co_stars_of(credits, &root)
        .into_iter()
        .filter(|name| *name != person)
        .collect();

    let frontier: HashSet<&str> = step_one.iter().copied().collect();
    let step_two = co_stars_of(credits, &frontier)
        .into_iter()
        .filter(|name| *name != person && !frontier.contains(name))
        .collect();

    Neighbourhood { step_one, step_two }
}

// =============================================================================
// Role Qualification and Collaborators
// =============================================================================

/// Jobs making up a "triple threat"
pub const TRIPLE_THREAT_ROLES: [&str; 3] = ["Director", "Writer", "Producer"];

/// Crew members of one film holding every job in `roles`
pub fn people_holding_all_roles<'a>(movie: &'a MovieCredit, roles: &[&str]) -> Vec<&'a str> {
    group_by_first_seen(movie.crew.iter(), |c| c.name.as_str())
        .into_iter()
        .filter(|g| {
            let jobs: HashSet<&str> = g.members.iter().map(|c| c.job.as_str()).collect();
            roles.iter().all(|role| jobs.contains(role))
        })
        .map(|g| g.key)
        .collect()
}

/// Everyone credited (cast or crew) on any film `director` directed
pub fn collaborators_of<'a>(credits: &'a [MovieCredit], director: &str) -> Vec<&'a str> {
    distinct(
        filter_by_person_and_role(credits, director, data_loader::DIRECTOR_JOB).flat_map(|mc| {
            mc.cast
                .iter()
                .map(|c| c.name.as_str())
                .chain(mc.crew.iter().map(|c| c.name.as_str()))
        }),
    )
}

/// Distinct members of `left` also present in `right`, in `left` order
pub fn intersect<'a>(left: &[&'a str], right: &[&str]) -> Vec<&'a str> {
    let right: HashSet<&str> = right.iter().copied().collect();
    distinct(left.iter().copied().filter(|name| right.contains(name)))
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_filter_never_grows_collection() {
        let credits = vec![
            movie(1, "A", vec![], vec![crew("X", "Directing", "Director")]),
            movie(2, "B", vec![], vec![crew("X", "Writing", "Writer")]),
            movie(3, "C", vec![], vec![]),
        ];
        let matched: Vec<_> = filter_by_person_and_role(&credits, "X", "Director").collect();
        assert_eq!(matched.len(), 1);
        assert!(matched.len() <= credits.len());
        assert_eq!(matched[0].title, "A");

        let none: Vec<_> = filter_by_person_and_role(&credits, "x", "Director").collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_flatten_keeps_parent() {
        let credits = vec![
            movie(1, "A", cast(&["P", "Q"]), vec![]),
            movie(2, "B", cast(&["R"]), vec![crew("S", "Sound", "Mixer")]),
        ];
        let pairs: Vec<(&str, &str)> = cast_with_parent(&credits)
            .map(|(mc, c)| (mc.title.as_str(), c.name.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "P"), ("A", "Q"), ("B", "R")]);
        assert_eq!(crew_with_parent(&credits).count(), 1);
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let items = vec!["b", "a", "c", "a", "b", "d"];
        let ranked = group_and_rank(items, |s| *s);
        let keys: Vec<&str> = ranked.iter().map(|g| g.key).collect();
        // b and a tie at 2 and keep first-seen order, then c and d
        assert_eq!(keys, vec!["b", "a", "c", "d"]);
        assert_eq!(ranked[0].count(), 2);
    }

    #[test]
    fn test_rank_by_score_is_stable() {
        let mut items = vec![("x", 1.0), ("y", 2.0), ("z", 1.0)];
        rank_by_score(&mut items, |item| item.1);
        assert_eq!(items, vec![("y", 2.0), ("x", 1.0), ("z", 1.0)]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([10, 20]), 15.0);
        assert_eq!(mean(Vec::<usize>::new()), 0.0);
    }

    #[test]
    fn test_cast_pair_orders_names() {
        let pair = CastPair::new("Zed", "Amy").unwrap();
        assert_eq!(pair.first, "Amy");
        assert_eq!(pair.second, "Zed");
        assert!(CastPair::new("Amy", "Amy").is_none());
    }

    #[test]
    fn test_co_star_pairs_count_movies() {
        let credits = vec![
            movie(1, "A", cast(&["P", "Q", "R"]), vec![]),
            movie(2, "B", cast(&["Q", "P", "P"]), vec![]),
        ];
        let pairs = co_star_pairs(&credits);
        assert_eq!(pairs.len(), 3);
        let pq = &pairs[0];
        assert_eq!((pq.key.first, pq.key.second), ("P", "Q"));
        assert_eq!(pq.count(), 2);
    }

    #[test]
    fn test_two_steps_example() {
        let credits = vec![
            movie(1, "A", cast(&["P", "Q"]), vec![]),
            movie(2, "B", cast(&["Q", "R"]), vec![]),
            movie(3, "C", cast(&["R", "S"]), vec![]),
        ];
        let hood = two_steps_from(&credits, "P");
        assert_eq!(hood.step_one, vec!["Q"]);
        assert_eq!(hood.step_two, vec!["R"]);
    }

    #[test]
    fn test_two_steps_unknown_person() {
        let credits = vec![movie(1, "A", cast(&["P", "Q"]), vec![])];
        assert_eq!(two_steps_from(&credits, "Nobody"), Neighbourhood::default());
    }

    #[test]
    fn test_triple_threat_requires_all_roles() {
        let full = movie(
            1,
            "Full",
            vec![],
            vec![
                crew("X", "Directing", "Director"),
                crew("X", "Writing", "Writer"),
                crew("X", "Production", "Producer"),
            ],
        );
        let partial = movie(
            2,
            "Partial",
            vec![],
            vec![
                crew("X", "Directing", "Director"),
                crew("X", "Writing", "Writer"),
                crew("X", "Writing", "Screenplay"),
            ],
        );
        assert_eq!(people_holding_all_roles(&full, &TRIPLE_THREAT_ROLES), vec!["X"]);
        assert!(people_holding_all_roles(&partial, &TRIPLE_THREAT_ROLES).is_empty());
    }

    #[test]
    fn test_collaborators_and_intersection() {
        let credits = vec![
            movie(
                1,
                "A",
                cast(&["Actor", "Shared"]),
                vec![crew("Dir1", "Directing", "Director")],
            ),
            movie(
                2,
                "B",
                cast(&["Shared"]),
                vec![
                    crew("Dir2", "Directing", "Director"),
                    crew("Editor", "Editing", "Editor"),
                ],
            ),
        ];
        let first = collaborators_of(&credits, "Dir1");
        let second = collaborators_of(&credits, "Dir2");
        assert_eq!(first, vec!["Actor", "Shared", "Dir1"]);
        assert_eq!(intersect(&first, &second), vec!["Shared"]);
    }
}
