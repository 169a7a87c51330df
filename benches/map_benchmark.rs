use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use forkmap::{ParallelMap, TransformError};

const INPUT_LEN: usize = 1 << 20;

// Doubling kernel shared by the sequential baseline and the engine
fn double(
    input: &[i64],
    output: &mut [i64],
    lo: usize,
    _hi: usize,
) -> Result<(), TransformError> {
    for (k, slot) in output.iter_mut().enumerate() {
        *slot = input[lo + k] * 2;
    }
    Ok(())
}

fn benchmark_map(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<i64> = (0..INPUT_LEN).map(|_| rng.gen_range(-1_000..1_000)).collect();

    let mut group = c.benchmark_group("Parallel Map");
    group.measurement_time(Duration::new(8, 0));
    group.warm_up_time(Duration::new(4, 0));

    // Sequential baseline: one direct invocation over the whole range
    group.bench_function(BenchmarkId::new("sequential", INPUT_LEN), |b| {
        b.iter(|| {
            let mut output = vec![0i64; INPUT_LEN];
            double(black_box(&input), &mut output, 0, INPUT_LEN).expect("Failed to map");
            output
        })
    });

    for cutoff in [1 << 10, 1 << 14, 1 << 18] {
        let engine = ParallelMap::with_default_pool(cutoff).expect("Failed to build engine");
        group.bench_function(BenchmarkId::new("parallel", cutoff), |b| {
            b.iter(|| engine.map(black_box(&input), &double).expect("Failed to map"))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map);
criterion_main!(benches);
