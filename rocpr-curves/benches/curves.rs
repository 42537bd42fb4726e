use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rocpr_curves::{
    compute_areas, compute_areas_prepared, compute_max_accuracy, prepare, ScoredExample,
};

/// Deterministic scored examples: positives skew towards higher scores and
/// scores are quantised so tied blocks occur.
fn random_examples(n: usize, seed: u64) -> Vec<ScoredExample> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..n)
        .map(|_| {
            let positive = next() < 0.3;
            let noise = next();
            let raw = if positive { 0.4 + 0.6 * noise } else { 0.7 * noise };
            ScoredExample::new((raw * 1000.0).round() / 1000.0, positive)
        })
        .collect()
}

fn bench_compute_areas(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_areas");

    for &n in &[1_000usize, 10_000, 100_000] {
        let examples = random_examples(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &examples, |b, ex| {
            b.iter(|| compute_areas(black_box(ex.as_slice())))
        });
    }

    group.finish();
}

fn bench_sweeps_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweeps");

    let examples = random_examples(100_000, 7);
    let prepared = match prepare(&examples) {
        Ok(p) => p,
        Err(e) => panic!("benchmark data is degenerate: {e}"),
    };

    group.bench_function("curves_100k_prepared", |b| {
        b.iter(|| compute_areas_prepared(black_box(&prepared)))
    });
    group.bench_function("max_accuracy_100k", |b| {
        b.iter(|| compute_max_accuracy(black_box(examples.as_slice())))
    });

    group.finish();
}

criterion_group!(benches, bench_compute_areas, bench_sweeps_only);
criterion_main!(benches);
