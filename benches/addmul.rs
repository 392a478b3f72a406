use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cpubench::config::{DEFAULT_ADD, DEFAULT_MUL};
use cpubench::flops::addmul;

fn addmul_kernel_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("addmul");

    for ops in [100_000u64, 1_000_000, 10_000_000] {
        group.bench_function(format!("{ops}_ops"), |b| {
            b.iter(|| {
                black_box(addmul(
                    black_box(DEFAULT_ADD),
                    black_box(DEFAULT_MUL),
                    black_box(ops),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, addmul_kernel_benchmark);
criterion_main!(benches);
