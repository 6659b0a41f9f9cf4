//! Criterion benchmarks for the grade pipeline.
//!
//! Uses seeded synthetic rosters to measure branching and aggregation
//! cost at different course sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_grades::engine::{Pipeline, PipelineConfig, Roster};
use u_grades::late::{LateMultiplierConfig, LateMultipliers};
use u_grades::model::{Assignment, Category, Lateness, Student, Submission};
use u_grades::search::{DropSearch, SlipDaySearch};

// ===========================================================================
// Synthetic rosters
// ===========================================================================

/// `students` students, each with `homework` homework assignments (some late)
/// and two exams.
fn synthetic_roster(students: u64, homework: usize, seed: u64) -> Roster {
    let mut rng = StdRng::seed_from_u64(seed);
    let roster = (0..students).map(|id| {
        let mut s = Student::new(id, format!("s{id}"))
            .with_category(
                Category::new("Homework", 0.5)
                    .with_drops(2)
                    .with_slip_days(3)
                    .with_late_multiplier(true),
            )
            .with_category(Category::new("Exams", 0.5));

        for i in 0..homework {
            let late_hours = if rng.random_bool(0.3) {
                rng.random_range(1..72)
            } else {
                0
            };
            let submission = Submission::new(rng.random_range(0.0..10.0))
                .with_lateness(Lateness::from_hours(late_hours));
            s = s.with_assignment(
                Assignment::new(format!("hw{i:02}"), "Homework", 10.0)
                    .with_group(i as u32)
                    .with_submission(submission),
            );
        }
        for name in ["midterm", "final"] {
            s = s.with_assignment(
                Assignment::new(name, "Exams", 100.0)
                    .with_submission(Submission::new(rng.random_range(40.0..100.0))),
            );
        }
        s
    });
    Roster::from_students(roster)
}

fn pipeline(parallel: bool) -> Pipeline {
    Pipeline::new()
        .with_config(
            PipelineConfig::default()
                .without_outcome_limit()
                .with_parallel(parallel),
        )
        .with_policy(SlipDaySearch::new())
        .with_policy(LateMultipliers::new(
            LateMultiplierConfig::default().with_scale(vec![0.9, 0.75, 0.5]),
        ))
        .with_policy(DropSearch::new())
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    for (students, homework) in [(10u64, 6usize), (50, 8), (100, 10)] {
        let roster = synthetic_roster(students, homework, 42);
        for parallel in [false, true] {
            let mode = if parallel { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(format!("s{}_hw{}_{}", students, homework, mode), students),
                &(roster.clone(), pipeline(parallel)),
                |b, (r, p)| {
                    b.iter(|| {
                        let result = p.run(black_box(r));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_reports");
    group.sample_size(10);

    for (students, homework) in [(10u64, 6usize), (50, 8)] {
        let config = PipelineConfig::default().without_outcome_limit();
        let expanded = match pipeline(true).run(&synthetic_roster(students, homework, 7)) {
            Ok(r) => r,
            Err(e) => panic!("synthetic roster failed: {e}"),
        };
        group.bench_with_input(
            BenchmarkId::new(format!("s{}_hw{}", students, homework), students),
            &(expanded, config),
            |b, (r, cfg)| b.iter(|| black_box(r.grade_reports(black_box(cfg)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_reports);
criterion_main!(benches);
