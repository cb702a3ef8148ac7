//! Benchmarks for merge enumeration.
//!
//! The number of merges grows as the product of all partition sizes, so these
//! benchmarks sweep the partition size for a fixed layer width.
//!
//! Run with:
//! ```bash
//! cargo bench --bench alpha_hat
//! ```

use ann_rs::abstraction::{abstract_layer_wise, alpha_hat};
use ann_rs::interval::IntervalDomain;
use ann_rs::network::{Activation, Layer, Network};
use ann_rs::pcm::binary_pcms;
use ann_rs::types::Partitioning;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;

/// Deterministic dense weights with mixed signs.
fn weights(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| ((i * 31 + j * 17) as f64).sin())
}

/// Splits `0..n` into consecutive partitions of `size` nodes (the last one may be shorter).
fn chunked(n: usize, size: usize) -> Partitioning {
    Partitioning::new(
        (0..n)
            .collect::<Vec<_>>()
            .chunks(size)
            .map(|chunk| chunk.to_vec())
            .collect(),
    )
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_pcm_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("pcm/enumeration");

    for size in [1, 2, 3, 4] {
        let partitioning = chunked(12, size);
        let count = binary_pcms(&partitioning).count();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("width=12", size), &partitioning, |b, p| {
            b.iter(|| binary_pcms(p).map(|pcm| pcm.sum()).sum::<f64>());
        });
    }

    group.finish();
}

fn bench_alpha_hat_partition_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_hat/partition_size");
    group.sample_size(10); // Larger partitions get slow quickly

    let n = 8;
    let matrix = weights(n, n);

    for size in [1, 2, 3] {
        let partitioning = chunked(n, size);
        group.bench_with_input(BenchmarkId::new("width=8", size), &partitioning, |b, p| {
            b.iter(|| alpha_hat(&matrix, p, p, &IntervalDomain).unwrap());
        });
    }

    group.finish();
}

fn bench_abstract_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("abstract_layer_wise");
    group.sample_size(10);

    for depth in [2, 4, 8] {
        let network: Network = (0..depth)
            .map(|_| Layer::new(weights(6, 6), Activation::ReLU))
            .collect();
        let mut partitionings = vec![Partitioning::identity(6)];
        partitionings.extend((1..depth).map(|_| chunked(6, 2)));
        partitionings.push(Partitioning::identity(6));
        let domains = vec![IntervalDomain; depth];

        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| abstract_layer_wise(&network, &partitionings, &domains).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pcm_enumeration,
    bench_alpha_hat_partition_size,
    bench_abstract_network,
);
criterion_main!(benches);
