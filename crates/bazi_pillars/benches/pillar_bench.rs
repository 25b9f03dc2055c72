use bazi_pillars::{day_pillar, four_pillars, julian_day_number};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn jdn_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("jdn");
    group.bench_function("julian_day_number", |b| {
        b.iter(|| julian_day_number(black_box(2026), black_box(8), black_box(23)))
    });
    group.finish();
}

fn pillar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(2026), black_box(8), black_box(23)))
    });
    group.bench_function("four_pillars_with_hour", |b| {
        b.iter(|| {
            four_pillars(
                black_box(1990),
                black_box(5),
                black_box(15),
                black_box(Some(10)),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, jdn_bench, pillar_bench);
criterion_main!(benches);
