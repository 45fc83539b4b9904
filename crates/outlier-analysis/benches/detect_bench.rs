//! Detection benchmarks across the three methods.
//! Run with: cargo bench -p outlier-analysis --bench detect_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outlier_analysis::{Method, OutlierDetector};

/// Deterministic pseudo-noise with a spike every 97 points.
fn make_sample(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let wobble = ((i * 7919) % 101) as f64 / 10.0;
            if i % 97 == 0 {
                500.0 + wobble
            } else {
                50.0 + wobble
            }
        })
        .collect()
}

fn detect_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let detector = OutlierDetector::new();

    for size in [1_000, 10_000, 100_000] {
        let sample = make_sample(size);
        for (name, method) in [
            ("z_score", Method::z_score(3.0)),
            ("iqr", Method::iqr()),
            ("modified_z_score", Method::modified_z_score(3.5)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &sample, |b, sample| {
                b.iter(|| detector.detect(black_box(sample), method).unwrap());
            });
        }
    }

    group.finish();
}

fn detect_many_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_many");
    group.sample_size(20);
    let detector = OutlierDetector::new();
    let samples: Vec<Vec<f64>> = (0..64).map(|i| make_sample(5_000 + i * 10)).collect();
    let jobs: Vec<(&[f64], Method)> = samples
        .iter()
        .map(|s| (s.as_slice(), Method::modified_z_score(3.5)))
        .collect();

    group.bench_function("64_columns", |b| {
        b.iter(|| detector.detect_many(black_box(&jobs)));
    });

    group.finish();
}

criterion_group!(benches, detect_methods, detect_many_parallel);
criterion_main!(benches);
