use criterion::Criterion;
use interpolate_points::{blend, Points};
use std::hint::black_box;

fn linear_points(n: i32) -> Points<f64> {
    Points::new((0..n).map(|k| (k, f64::from(k) * 2.0))).expect("Valid key points")
}

pub fn scalar_lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("points::scalar");
    let small = linear_points(11);
    let large = linear_points(100_000);

    group.bench_function("at_small_mid", |b| {
        b.iter(|| {
            black_box(small.at(black_box(5.5)).unwrap());
        });
    });

    group.bench_function("at_large_mid", |b| {
        b.iter(|| {
            black_box(large.at(black_box(54_321.25)).unwrap());
        });
    });

    group.bench_function("at_large_exact_key", |b| {
        b.iter(|| {
            black_box(large.at(black_box(77_777.0)).unwrap()); // No blend call
        });
    });

    group.bench_function("at_large_below", |b| {
        b.iter(|| {
            black_box(large.at(black_box(-1.0e9)).unwrap()); // Clamped to the first key
        });
    });

    group.bench_function("at_large_above", |b| {
        b.iter(|| {
            black_box(large.at(black_box(1.0e9)).unwrap()); // Clamped to the last key
        });
    });

    group.bench_function("at_with_lower_large", |b| {
        b.iter(|| {
            black_box(
                large
                    .at_with(black_box(12_345.5), blend::lower::<f64>)
                    .unwrap(),
            );
        });
    });

    // Every merge throws away the sorted view, so the next query pays for a rebuild.
    group.bench_function("merge_then_at_small", |b| {
        b.iter(|| {
            let merged = small.merge([(black_box(20), 40.0)]).unwrap();
            black_box(merged.at(black_box(15.0)).unwrap());
        });
    });

    group.finish();
}

pub fn sequence_lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("points::sequence");
    let points = Points::new((0..1_000).map(|k| {
        let k = f64::from(k);
        (k, vec![k, k * 10.0, k * 100.0])
    }))
    .expect("Valid key points");

    group.bench_function("at_vec3_mid", |b| {
        b.iter(|| {
            black_box(points.at(black_box(500.5)).unwrap());
        });
    });

    group.bench_function("at_vec3_exact_key", |b| {
        b.iter(|| {
            black_box(points.at(black_box(500.0)).unwrap());
        });
    });

    group.finish();
}
