use criterion::{criterion_group, criterion_main};

mod benchmarks;
use benchmarks::points_lookup::{scalar_lookup_benchmarks, sequence_lookup_benchmarks};

criterion_group!(
    lookup_benches,
    scalar_lookup_benchmarks,
    sequence_lookup_benchmarks,
);

criterion_main!(lookup_benches);
