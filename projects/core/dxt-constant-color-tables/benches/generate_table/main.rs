use criterion::{criterion_group, criterion_main, Criterion};
use dxt_constant_color_tables::{ConstantColorTable, EndpointPrecision, TableVariant};
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Constant Colour Table Generation");
    group.sample_size(10);

    for &variant in TableVariant::all_values() {
        group.bench_function(format!("generate_{}", variant.suffix()), |b| {
            b.iter(|| ConstantColorTable::generate(black_box(variant)))
        });
    }

    // Single intensity in the largest search space.
    group.bench_function("find_best_pair_66", |b| {
        b.iter(|| {
            dxt_constant_color_tables::search::find_best_pair(
                black_box(128),
                EndpointPrecision::Bits6,
                EndpointPrecision::Bits6,
            )
        })
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
