use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use range_search::algorithms::Value;
use range_search::timing::Algorithm;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        // All twos, searched for zero: never found.
        let range: Vec<Value> = vec![2; size];

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &range,
                |b, range| b.iter(|| algorithm.search(black_box(range), black_box(0))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
