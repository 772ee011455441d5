use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ordkit::prelude::*;
use rand::Rng;
use std::hint::black_box;

#[derive(Clone)]
struct Row {
    group: u8,
    score: Option<u32>,
    name: String,
}

fn random_rows(count: usize) -> Vec<Row> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Row {
            group: rng.random_range(0..16),
            score: rng.random_bool(0.9).then(|| rng.random_range(0..1_000)),
            name: (0..8).map(|_| rng.random_range('a'..='z')).collect(),
        })
        .collect()
}

fn bench_composed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Composed Comparator");
    group.sample_size(10);

    let rows = random_rows(10_000);

    let composed = comparing(|r: &Row| r.group)
        .then(nulls_last(|r: &Row| r.score).reverse())
        .finally(comparing(|r: &Row| r.name.clone()));

    group.bench_function("ordkit (composed)", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| composed.sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Hand-written equivalent
    group.bench_function("slice::sort_by (closure)", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| {
                data.sort_by(|x, y| {
                    x.group
                        .cmp(&y.group)
                        .then_with(|| match (x.score, y.score) {
                            (None, None) => std::cmp::Ordering::Equal,
                            (None, Some(_)) => std::cmp::Ordering::Less,
                            (Some(_), None) => std::cmp::Ordering::Greater,
                            (Some(a), Some(b)) => b.cmp(&a),
                        })
                        .then_with(|| x.name.cmp(&y.name))
                })
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_extremes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Extremes");
    group.sample_size(10);

    let rows = random_rows(100_000);
    let by_score = nulls_first(|r: &Row| r.score);

    group.bench_function("minimum_by", |b| {
        b.iter(|| minimum_by(black_box(&rows), &by_score).map(|r| r.score))
    });

    group.bench_function("maximum_by", |b| {
        b.iter(|| maximum_by(black_box(&rows), &by_score).map(|r| r.score))
    });

    group.finish();
}

criterion_group!(benches, bench_composed, bench_extremes);
criterion_main!(benches);
