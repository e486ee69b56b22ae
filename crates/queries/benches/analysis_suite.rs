//! Benchmarks for the analysis suite
//!
//! Run with: cargo bench --package queries
//!
//! Uses a synthetic catalog so no dataset file is needed.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{CastMember, CreditIndex, CrewMember, MovieCredit};
use queries::AnalysisSuite;
use queries::primitives::{co_star_pairs, two_steps_from};

const DEPARTMENTS: [&str; 5] = ["Directing", "Writing", "Camera", "Sound", "Production"];

fn synthetic_index(movies: u32) -> CreditIndex {
    let credits = (0..movies)
        .map(|id| MovieCredit {
            movie_id: id,
            title: format!("Movie {}", id),
            cast: (0..20)
                .map(|slot| CastMember {
                    name: format!("Actor {}", (id * 7 + slot) % 500),
                    character: format!("Role {}", slot),
                })
                .collect(),
            crew: (0..30u32)
                .map(|slot| CrewMember {
                    name: format!("Crew {}", (id * 3 + slot) % 300),
                    department: DEPARTMENTS[(slot % 5) as usize].to_string(),
                    job: if slot == 0 { "Director" } else { "Assistant" }.to_string(),
                })
                .collect(),
        })
        .collect();
    CreditIndex::from_credits(credits).expect("synthetic ids are unique")
}

fn bench_standard_suite(c: &mut Criterion) {
    let index = synthetic_index(1000);
    let suite = AnalysisSuite::standard();

    c.bench_function("standard_suite", |b| {
        b.iter(|| black_box(suite.run(black_box(&index))))
    });
}

fn bench_co_star_pairs(c: &mut Criterion) {
    let index = synthetic_index(1000);

    c.bench_function("co_star_pairs", |b| {
        b.iter(|| black_box(co_star_pairs(black_box(index.credits())).len()))
    });
}

fn bench_two_steps(c: &mut Criterion) {
    let index = synthetic_index(1000);

    c.bench_function("two_steps_from", |b| {
        b.iter(|| black_box(two_steps_from(black_box(index.credits()), "Actor 1").step_two.len()))
    });
}

criterion_group!(
    benches,
    bench_standard_suite,
    bench_co_star_pairs,
    bench_two_steps
);
criterion_main!(benches);
