use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use obligo::branching::{
    brancher::{Brancher, CommitResult},
    interval::IntervalBrancher,
    variables::{Domain, OrdSetDomain, VariableSet},
};

/// `n` rectangles of width 10 placed on a strip of length `3n`.
fn packing_coordinates(n: usize) -> (VariableSet, Vec<i64>) {
    let vars: VariableSet = (0..n)
        .map(|_| Box::new(OrdSetDomain::from_bounds(0, 3 * n as i64)) as Domain)
        .collect();
    let weights = vec![10; n];
    (vars, weights)
}

fn status_scan_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Status Scan");

    for n in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            // Every mandatory part is already forced, so each status call
            // walks all n variables before reporting exhaustion.
            let vars: VariableSet = (0..n)
                .map(|_| Box::new(OrdSetDomain::from_bounds(0, 2)) as Domain)
                .collect();
            let mut brancher = IntervalBrancher::new(&vars, vec![10; n], 0.5).unwrap();
            b.iter(|| {
                assert!(!black_box(brancher.has_alternatives(&vars)));
            });
        });
    }
    group.finish();
}

fn left_first_dive_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Left-First Dive");

    for n in [10usize, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let (vars, weights) = packing_coordinates(n);
            b.iter(|| {
                let mut vars = black_box(vars.clone());
                let mut brancher =
                    IntervalBrancher::new(&vars, weights.clone(), 0.5).unwrap();
                let mut decisions = 0u32;
                while brancher.has_alternatives(&vars) {
                    let choice = brancher.select_branch(&vars).unwrap();
                    if brancher.commit(&mut vars, &choice, 0) == CommitResult::Failed {
                        brancher.commit(&mut vars, &choice, 1);
                    }
                    decisions += 1;
                }
                assert!(decisions > 0);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, status_scan_benchmark, left_first_dive_benchmark);
criterion_main!(benches);
