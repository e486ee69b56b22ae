//! Crew-side statistics: departments, directors and multi-role people.

use crate::primitives::{
    Group, PersonDepartment, TRIPLE_THREAT_ROLES, crew_with_parent, distinct,
    filter_by_person_and_role, group_and_rank, group_by_first_seen, mean,
    people_holding_all_roles, rank_by_count, rank_by_score,
};
use crate::report::{Limit, Outcome};
use crate::traits::Analysis;
use data_loader::{CreditIndex, CrewMember, DIRECTOR_JOB, MovieCredit};

/// Departments in order of first appearance
pub fn distinct_departments(credits: &[MovieCredit]) -> Vec<&str> {
    distinct(crew_with_parent(credits).map(|(_, c)| c.department.as_str()))
}

/// Number of crew entries (not people) in `department`
pub fn department_headcount(credits: &[MovieCredit], department: &str) -> usize {
    crew_with_parent(credits)
        .filter(|(_, c)| c.department == department)
        .count()
}

/// Crew of a director's films grouped by (name, department), excluding
/// the director, most entries first
pub fn inner_circle<'a>(
    credits: &'a [MovieCredit],
    director: &str,
) -> Vec<Group<PersonDepartment<'a>, &'a CrewMember>> {
    let crew = filter_by_person_and_role(credits, director, DIRECTOR_JOB)
        .flat_map(|mc| mc.crew.iter())
        .filter(|c| c.name != director);
    group_and_rank(crew, |c| PersonDepartment {
        name: c.name.as_str(),
        department: c.department.as_str(),
    })
}

/// A crew member and the distinct departments they worked in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSpread<'a> {
    pub name: &'a str,
    pub departments: Vec<&'a str>,
}

/// Crew members ranked by how many distinct departments they span
pub fn department_spread(credits: &[MovieCredit]) -> Vec<DepartmentSpread<'_>> {
    let mut spread: Vec<DepartmentSpread> =
        group_by_first_seen(crew_with_parent(credits).map(|(_, c)| c), |c| c.name.as_str())
            .into_iter()
            .map(|g| DepartmentSpread {
                name: g.key,
                departments: distinct(g.members.iter().map(|c| c.department.as_str())),
            })
            .collect();
    spread.sort_by(|a, b| b.departments.len().cmp(&a.departments.len()));
    spread
}

/// Films where someone holds every triple-threat role, with those people
pub fn triple_threats(credits: &[MovieCredit]) -> Vec<(&MovieCredit, Vec<&str>)> {
    credits
        .iter()
        .map(|mc| (mc, people_holding_all_roles(mc, &TRIPLE_THREAT_ROLES)))
        .filter(|(_, people)| !people.is_empty())
        .collect()
}

/// Per-director averages over the films they directed
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorStats<'a> {
    pub director: &'a str,
    pub film_count: usize,
    pub avg_cast: f64,
    pub avg_crew: f64,
}

/// Stats for every credited director, most films first
///
/// A film counts toward its first listed director only; films without a
/// director are skipped.
pub fn director_stats(credits: &[MovieCredit]) -> Vec<DirectorStats<'_>> {
    let directed = credits
        .iter()
        .filter_map(|mc| mc.director().map(|director| (director, mc)));

    rank_by_count(group_by_first_seen(directed, |(director, _)| *director))
        .into_iter()
        .map(|g| DirectorStats {
            director: g.key,
            film_count: g.count(),
            avg_cast: mean(g.members.iter().map(|(_, mc)| mc.cast.len())),
            avg_crew: mean(g.members.iter().map(|(_, mc)| mc.crew.len())),
        })
        .collect()
}

/// Average cast size of the films a department worked on
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentInfluence<'a> {
    pub department: &'a str,
    pub avg_cast: f64,
    pub film_count: usize,
}

/// Departments ranked by the average cast size of their films
///
/// A department is counted once per film regardless of how many of its
/// people worked there.
pub fn department_influence(credits: &[MovieCredit]) -> Vec<DepartmentInfluence<'_>> {
    let per_film = credits.iter().flat_map(|mc| {
        distinct(mc.crew.iter().map(|c| c.department.as_str()))
            .into_iter()
            .map(move |department| (department, mc.cast.len()))
    });

    let mut influence: Vec<DepartmentInfluence> =
        group_by_first_seen(per_film, |(department, _)| *department)
            .into_iter()
            .map(|g| DepartmentInfluence {
                department: g.key,
                avg_cast: mean(g.members.iter().map(|(_, size)| *size)),
                film_count: g.count(),
            })
            .collect();
    rank_by_score(&mut influence, |d| d.avg_cast);
    influence
}

/// Every department that appears in the crew lists
pub struct Departments;

impl Analysis for Departments {
    fn header(&self) -> String {
        "Distinct crew departments".to_string()
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            distinct_departments(index.credits())
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Total crew entries in one department
pub struct DepartmentHeadcount {
    department: String,
}

impl DepartmentHeadcount {
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
        }
    }
}

impl Analysis for DepartmentHeadcount {
    fn header(&self) -> String {
        format!("Crew entries in the {} department", self.department)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Scalar(department_headcount(index.credits(), &self.department).to_string())
    }
}

/// A director's most frequent crew collaborators
pub struct InnerCircle {
    director: String,
}

impl InnerCircle {
    pub fn new(director: impl Into<String>) -> Self {
        Self {
            director: director.into(),
        }
    }
}

impl Analysis for InnerCircle {
    fn header(&self) -> String {
        format!("Inner circle of {}", self.director)
    }

    fn limit(&self) -> Limit {
        Limit::Top(5)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let circle = self.limit().apply(inner_circle(index.credits(), &self.director));
        Outcome::Lines(
            circle
                .into_iter()
                .map(|g| format!("{} ({}): {} films", g.key.name, g.key.department, g.count()))
                .collect(),
        )
    }
}

/// Crew members who worked across the most departments
pub struct VersatileCrew;

impl Analysis for VersatileCrew {
    fn header(&self) -> String {
        "Most versatile crew members".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(5)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        let spread = self.limit().apply(department_spread(index.credits()));
        Outcome::Lines(
            spread
                .into_iter()
                .map(|s| {
                    format!(
                        "{}: {} departments ({})",
                        s.name,
                        s.departments.len(),
                        s.departments.join(", ")
                    )
                })
                .collect(),
        )
    }
}

/// Films with someone who directed, wrote and produced them
pub struct TripleThreats;

impl Analysis for TripleThreats {
    fn header(&self) -> String {
        "Films with a director-writer-producer".to_string()
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            triple_threats(index.credits())
                .into_iter()
                .map(|(mc, people)| format!("{}: {}", mc.title, people.join(", ")))
                .collect(),
        )
    }
}

/// Film count and average team sizes per director
pub struct DirectorReport;

impl Analysis for DirectorReport {
    fn header(&self) -> String {
        "Director statistics".to_string()
    }

    fn limit(&self) -> Limit {
        Limit::Top(15)
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            director_stats(index.credits())
                .into_iter()
                .map(|s| {
                    format!(
                        "{}: {} films, avg cast: {:.1}, avg crew: {:.1}",
                        s.director, s.film_count, s.avg_cast, s.avg_crew
                    )
                })
                .collect(),
        )
    }
}

/// Departments ranked by the cast size of the films they appear on
pub struct DepartmentInfluenceReport;

impl Analysis for DepartmentInfluenceReport {
    fn header(&self) -> String {
        "Department influence on cast size".to_string()
    }

    fn run(&self, index: &CreditIndex) -> Outcome {
        Outcome::Lines(
            department_influence(index.credits())
                .into_iter()
                .map(|d| {
                    format!(
                        "{}: avg cast size {:.1} ({} films)",
                        d.department, d.avg_cast, d.film_count
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::fixtures::*;

    fn named_cast(size: usize) -> Vec<data_loader::CastMember> {
        (0..size).map(|i| role(&format!("Actor {i}"), "")).collect()
    }

    #[test]
    fn test_departments_first_seen() {
        let index = index(vec![
            movie(
                1,
                "A",
                vec![],
                vec![
                    crew("X", "Sound", "Mixer"),
                    crew("Y", "Camera", "DoP"),
                ],
            ),
            movie(
                2,
                "B",
                vec![],
                vec![
                    crew("Z", "Directing", "Director"),
                    crew("W", "Sound", "Foley"),
                ],
            ),
        ]);
        assert_eq!(distinct_departments(index.credits()), vec!["Sound", "Camera", "Directing"]);
        assert_eq!(department_headcount(index.credits(), "Sound"), 2);
        assert_eq!(
            DepartmentHeadcount::new("Camera").run(&index),
            Outcome::Scalar("1".to_string())
        );
    }

    #[test]
    fn test_inner_circle_excludes_director() {
        let index = index(vec![
            movie(
                1,
                "Pulp Fiction",
                vec![],
                vec![
                    crew("Quentin Tarantino", "Directing", "Director"),
                    crew("Quentin Tarantino", "Writing", "Writer"),
                    crew("Sally Menke", "Editing", "Editor"),
                    crew("Lawrence Bender", "Production", "Producer"),
                ],
            ),
            movie(
                2,
                "Jackie Brown",
                vec![],
                vec![
                    crew("Quentin Tarantino", "Directing", "Director"),
                    crew("Lawrence Bender", "Production", "Producer"),
                ],
            ),
            movie(
                3,
                "Four Rooms",
                vec![],
                vec![crew("Sally Menke", "Editing", "Editor")],
            ),
        ]);
        assert_eq!(
            InnerCircle::new("Quentin Tarantino").run(&index),
            Outcome::Lines(vec![
                "Lawrence Bender (Production): 2 films".to_string(),
                "Sally Menke (Editing): 1 films".to_string(),
            ])
        );
    }

    #[test]
    fn test_versatile_crew() {
        let index = index(vec![
            movie(
                1,
                "A",
                vec![],
                vec![
                    crew("Solo", "Sound", "Mixer"),
                    crew("Multi", "Camera", "DoP"),
                ],
            ),
            movie(
                2,
                "B",
                vec![],
                vec![
                    crew("Multi", "Writing", "Writer"),
                    crew("Multi", "Camera", "Operator"),
                ],
            ),
        ]);
        match VersatileCrew.run(&index) {
            Outcome::Lines(lines) => {
                assert_eq!(lines[0], "Multi: 2 departments (Camera, Writing)");
                assert_eq!(lines[1], "Solo: 1 departments (Sound)");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_triple_threats() {
        let index = index(vec![
            movie(
                1,
                "Full House",
                vec![],
                vec![
                    crew("X", "Directing", "Director"),
                    crew("X", "Writing", "Writer"),
                    crew("X", "Production", "Producer"),
                ],
            ),
            movie(
                2,
                "Two Hats",
                vec![],
                vec![crew("X", "Directing", "Director"), crew("X", "Writing", "Writer")],
            ),
        ]);
        assert_eq!(
            TripleThreats.run(&index),
            Outcome::Lines(vec!["Full House: X".to_string()])
        );
    }

    #[test]
    fn test_director_stats() {
        let index = index(vec![
            movie(1, "A", named_cast(2), vec![crew("D1", "Directing", "Director")]),
            movie(2, "B", named_cast(4), vec![crew("D2", "Directing", "Director")]),
            movie(
                3,
                "C",
                named_cast(4),
                vec![
                    crew("D2", "Directing", "Director"),
                    crew("E", "Editing", "Editor"),
                ],
            ),
            movie(4, "Orphan", named_cast(9), vec![]),
        ]);
        let stats = director_stats(index.credits());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].director, "D2");
        assert_eq!(stats[0].film_count, 2);
        assert_eq!(stats[0].avg_cast, 4.0);
        assert_eq!(stats[0].avg_crew, 1.5);
        assert_eq!(
            DirectorReport.run(&index),
            Outcome::Lines(vec![
                "D2: 2 films, avg cast: 4.0, avg crew: 1.5".to_string(),
                "D1: 1 films, avg cast: 2.0, avg crew: 1.0".to_string(),
            ])
        );
    }

    #[test]
    fn test_department_average_example() {
        let index = index(vec![
            movie(
                1,
                "Ten",
                named_cast(10),
                vec![
                    crew("C1", "Camera", "DoP"),
                    crew("C2", "Camera", "Operator"),
                ],
            ),
            movie(2, "Twenty", named_cast(20), vec![crew("C3", "Camera", "DoP")]),
            movie(3, "Five", named_cast(5), vec![crew("S", "Sound", "Mixer")]),
        ]);
        let influence = department_influence(index.credits());
        assert_eq!(influence[0].department, "Camera");
        assert_eq!(influence[0].avg_cast, 15.0);
        assert_eq!(influence[0].film_count, 2);
        assert_eq!(influence[1].department, "Sound");
        assert_eq!(
            DepartmentInfluenceReport.run(&index),
            Outcome::Lines(vec![
                "Camera: avg cast size 15.0 (2 films)".to_string(),
                "Sound: avg cast size 5.0 (1 films)".to_string(),
            ])
        );
    }
}
