use bazi_base::{ALL_BRANCHES, Branch};
use bazi_fortune::{daily_ratings, day_master_strength};
use bazi_pillars::four_pillars;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn rating_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratings");
    group.bench_function("daily_ratings", |b| {
        b.iter(|| daily_ratings(black_box(Branch::Chen), 2026, 8, 23))
    });
    group.bench_function("daily_ratings_year_sweep", |b| {
        b.iter(|| {
            for z in ALL_BRANCHES {
                for day in 1..=28i64 {
                    black_box(daily_ratings(z, 2026, 2, day));
                }
            }
        })
    });
    group.finish();
}

fn strength_bench(c: &mut Criterion) {
    let pillars = four_pillars(1990, 5, 15, Some(10));
    let mut group = c.benchmark_group("strength");
    group.bench_function("day_master_strength", |b| {
        b.iter(|| day_master_strength(black_box(&pillars)))
    });
    group.finish();
}

criterion_group!(benches, rating_bench, strength_bench);
criterion_main!(benches);
