//! Naive vs blocked vs parallel multiply.
//!
//! ```bash
//! cargo bench --bench matmul_bench
//! cargo bench --bench matmul_bench -- blocked
//! ```

use bmm::blocked::tiled::matmul_blocked;
use bmm::{Config, Fill, Matrix, matmul_naive, multiply_parallel};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SIZES: [usize; 3] = [128, 256, 512];

fn bench_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in SIZES {
        let a = Matrix::<i32>::filled(size, Fill::Random { seed: 1 });
        let b = Matrix::<i32>::filled(size, Fill::Random { seed: 2 });
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut out = Matrix::zeros(n);
                matmul_naive(black_box(&a), black_box(&b), &mut out);
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut out = Matrix::zeros(n);
                matmul_blocked(black_box(&a), black_box(&b), &mut out, 32);
                out
            })
        });

        let config = Config::new(size).with_block_size(32).with_threads(4);
        group.bench_with_input(BenchmarkId::new("parallel_4", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut out = Matrix::zeros(n);
                multiply_parallel(black_box(&a), black_box(&b), &mut out, &config)
                    .expect("parallel multiply");
                out
            })
        });
    }

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let size = 256;
    let a = Matrix::<i32>::filled(size, Fill::Random { seed: 3 });
    let b = Matrix::<i32>::filled(size, Fill::Random { seed: 4 });

    let mut group = c.benchmark_group("block_size");
    group.sample_size(10);
    for block in [8, 16, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |bench, &block| {
            bench.iter(|| {
                let mut out = Matrix::zeros(size);
                matmul_blocked(black_box(&a), black_box(&b), &mut out, block);
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_by_size, bench_block_sizes);
criterion_main!(benches);
