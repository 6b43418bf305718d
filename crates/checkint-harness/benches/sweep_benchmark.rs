// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use checkint_core::num::domain::BoundedDomain;
use checkint_harness::monitor::no_op::NoOperationMonitor;
use checkint_harness::operation::{Implementations, Operation};
use checkint_harness::sweep::{
    PackedPairs, exhaustive_binary_cases, exhaustive_unary_cases, sweep_binary, sweep_unary,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// One exhaustive 8-bit sweep per operation, optimized against reference.
fn bench_exhaustive_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_i8_sweep");

    for op in Operation::ALL {
        match op.implementations::<i8>() {
            Implementations::Unary {
                tricky,
                conservative,
            } => {
                group.throughput(Throughput::Elements(exhaustive_unary_cases::<i8>()));
                group.bench_with_input(BenchmarkId::new("unary", op), &op, |b, &op| {
                    b.iter(|| {
                        let mut monitor = NoOperationMonitor::new();
                        let stats = sweep_unary(
                            op,
                            tricky,
                            conservative,
                            BoundedDomain::<i8>::full(),
                            exhaustive_unary_cases::<i8>(),
                            &mut monitor,
                        );
                        black_box(stats)
                    })
                });
            }
            Implementations::Binary {
                tricky,
                conservative,
            } => {
                group.throughput(Throughput::Elements(exhaustive_binary_cases::<i8>()));
                group.bench_with_input(BenchmarkId::new("binary", op), &op, |b, &op| {
                    b.iter(|| {
                        let pairs = match PackedPairs::<i8>::new() {
                            Some(pairs) => pairs,
                            None => panic!("Benchmark configuration error: 8-bit pairs must be enumerable."),
                        };
                        let mut monitor = NoOperationMonitor::new();
                        let stats = sweep_binary(
                            op,
                            tricky,
                            conservative,
                            pairs,
                            exhaustive_binary_cases::<i8>(),
                            &mut monitor,
                        );
                        black_box(stats)
                    })
                });
            }
        }
    }
    group.finish();
}

/// The optimized multiplication check alone, across widths.
fn bench_mul_checks(c: &mut Criterion) {
    use checkint_core::ops::arith::mul;

    let mut group = c.benchmark_group("mul_check");
    let operands: Vec<(i64, i64)> = (0..1024i64)
        .map(|i| (i.wrapping_mul(0x1E37_79B9_7F4A_7C15), (i - 512) << 20))
        .collect();
    group.throughput(Throughput::Elements(operands.len() as u64));

    group.bench_function("i64", |b| {
        b.iter(|| {
            let mut ok = 0u32;
            for &(x, y) in &operands {
                ok += mul(black_box(x), black_box(y)).is_some() as u32;
            }
            ok
        })
    });
    group.bench_function("i32", |b| {
        b.iter(|| {
            let mut ok = 0u32;
            for &(x, y) in &operands {
                ok += mul(black_box(x as i32), black_box((y >> 20) as i32)).is_some() as u32;
            }
            ok
        })
    });
    group.finish();
}

criterion_group!(benches, bench_exhaustive_sweeps, bench_mul_checks);
criterion_main!(benches);
