/*!
 * Scheduling Benchmarks
 *
 * Compare policy run cost on the seed set and on larger synthetic workloads
 */

use cpu_sched_sim::{Policy, ProcessRegistry, ProcessSpec, Scheduler, SchedulerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic workload with staggered arrivals and varied bursts
fn synthetic(count: usize) -> ProcessRegistry {
    let specs = (0..count).map(|i| {
        let i = i as i64;
        ProcessSpec::new(i + 1, (i * 7 % 11) as i32, i * 3 % 50, 1 + i * 13 % 29)
    });
    ProcessRegistry::from_specs(specs).unwrap()
}

fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    for policy in Policy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            let mut scheduler = Scheduler::default();
            b.iter(|| black_box(scheduler.run(policy).unwrap()));
        });
    }

    group.finish();
}

fn bench_workload_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload_size");

    for size in [16, 128, 512] {
        for policy in Policy::ALL {
            let mut scheduler = Scheduler::with_registry(synthetic(size), SchedulerConfig::default());
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), size),
                &policy,
                |b, &policy| {
                    b.iter(|| black_box(scheduler.run(policy).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");

    for quantum in [1, 4, 16] {
        let mut scheduler = Scheduler::with_registry(synthetic(128), SchedulerConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &quantum, |b, &q| {
            b.iter(|| black_box(scheduler.round_robin(q).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seed, bench_workload_size, bench_quantum);
criterion_main!(benches);
