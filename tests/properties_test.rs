/*!
 * Scheduling Property Tests
 * Invariants that hold for arbitrary workloads under the corrected clock
 */

use cpu_sched_sim::process::ordering::{is_sorted_by, sorted};
use cpu_sched_sim::{
    Policy, ProcessRegistry, ProcessSpec, RoundRobinFinish, RunReport, Scheduler, SchedulerConfig,
    SchedulerError, SortKey,
};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i32..10, 0i64..40, 1i64..20), 1..10).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (priority, arrival, burst))| {
                ProcessSpec::new(i as i64 + 1, priority, arrival, burst)
            })
            .collect()
    })
}

fn run(specs: &[ProcessSpec], policy: Policy, quantum: i64) -> RunReport {
    run_with(specs, policy, quantum, SchedulerConfig::default())
}

fn run_with(specs: &[ProcessSpec], policy: Policy, quantum: i64, config: SchedulerConfig) -> RunReport {
    let registry = ProcessRegistry::from_specs(specs.iter().copied()).unwrap();
    let mut scheduler = Scheduler::with_registry(registry, config);
    match policy {
        Policy::RoundRobin => scheduler.round_robin(quantum).unwrap(),
        other => scheduler.run(other).unwrap(),
    }
}

proptest! {
    #[test]
    fn prop_every_process_completes(specs in workload(), quantum in 1i64..8) {
        for policy in Policy::ALL {
            let report = run(&specs, policy, quantum);
            prop_assert_eq!(report.completion_order().len(), specs.len());
            for p in &report.processes {
                prop_assert!(p.is_terminal());
                prop_assert_eq!(p.work_done, p.burst_time);
                prop_assert_eq!(p.turnaround_time, p.finish_time - p.arrival_time);
                prop_assert!(p.waiting_time >= 0);
            }

            let finish: i64 = report.processes.iter().map(|p| p.finish_time).sum();
            let arrival: i64 = report.processes.iter().map(|p| p.arrival_time).sum();
            prop_assert_eq!(report.summary.total_turnaround, finish - arrival);
        }
    }

    #[test]
    fn prop_timeline_is_consistent(specs in workload(), quantum in 1i64..8) {
        // clock finish, so the last slice of each process ends at its finish time
        let config = SchedulerConfig::default().with_round_robin_finish(RoundRobinFinish::Clock);
        for policy in Policy::ALL {
            let report = run_with(&specs, policy, quantum, config);
            for pair in report.timeline.windows(2) {
                prop_assert!(pair[0].end() <= pair[1].start);
            }
            for p in &report.processes {
                let slices: Vec<_> = report.timeline.iter().filter(|s| s.pid == p.id).collect();
                let executed: i64 = slices.iter().map(|s| s.duration).sum();
                prop_assert_eq!(executed, p.burst_time);
                prop_assert!(slices.iter().all(|s| s.start >= p.arrival_time));
                prop_assert_eq!(slices.last().map(|s| s.end()), Some(p.finish_time));
            }
        }
    }

    #[test]
    fn prop_non_preemptive_waiting(specs in workload()) {
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority] {
            let report = run(&specs, policy, 1);
            for p in &report.processes {
                prop_assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
            }
        }
    }

    #[test]
    fn prop_round_robin_finish_is_waiting_plus_burst(specs in workload(), quantum in 1i64..8) {
        let report = run(&specs, Policy::RoundRobin, quantum);
        for p in &report.processes {
            prop_assert_eq!(p.finish_time, p.waiting_time + p.burst_time);
        }
    }

    #[test]
    fn prop_round_robin_waiting_matches_slices(specs in workload(), quantum in 1i64..8) {
        let report = run(&specs, Policy::RoundRobin, quantum);
        let from_slices: i64 = report
            .timeline
            .iter()
            .map(|s| s.duration * s.waiting_peers as i64)
            .sum();
        prop_assert_eq!(report.summary.total_waiting, from_slices);
        prop_assert!(report.timeline.iter().all(|s| s.duration <= quantum));
    }

    #[test]
    fn prop_sort_is_stable_and_idempotent(specs in workload()) {
        let registry = ProcessRegistry::from_specs(specs.iter().copied()).unwrap();
        for key in [SortKey::ArrivalTime, SortKey::BurstTime, SortKey::Priority] {
            let once = sorted(registry.all(), key);
            prop_assert!(is_sorted_by(&once, key));
            prop_assert_eq!(sorted(&once, key), once.clone());

            // ties keep creation order, and ids were created ascending
            for pair in once.windows(2) {
                if key.extract(&pair[0]) == key.extract(&pair[1]) {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn prop_invalid_quantum_is_rejected(specs in workload(), quantum in -10i64..=0) {
        let registry = ProcessRegistry::from_specs(specs.iter().copied()).unwrap();
        let mut scheduler = Scheduler::with_registry(registry, SchedulerConfig::default());
        let before = scheduler.registry().all().to_vec();

        prop_assert_eq!(
            scheduler.round_robin(quantum).unwrap_err(),
            SchedulerError::InvalidQuantum(quantum)
        );
        prop_assert_eq!(scheduler.registry().all(), before.as_slice());
        prop_assert!(scheduler.last_summary().is_none());
    }
}

#[test]
fn test_empty_registry_every_policy() {
    let mut scheduler = Scheduler::with_registry(ProcessRegistry::empty(), SchedulerConfig::default());
    for policy in Policy::ALL {
        assert_eq!(scheduler.run(policy).unwrap_err(), SchedulerError::EmptyRegistry);
    }
    assert_eq!(scheduler.round_robin(3).unwrap_err(), SchedulerError::EmptyRegistry);
}
