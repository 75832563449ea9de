/*!
 * CPU Scheduler
 * Runs the scheduling policies over the process registry
 */

pub mod config;
pub mod context;
pub mod fcfs;
pub mod non_preemptive;
pub mod report;
pub mod round_robin;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use config::{ClockModel, RoundRobinFinish, SchedulerConfig};
pub use context::RunContext;
pub use fcfs::FirstComeFirstServe;
pub use non_preemptive::{PriorityFirst, ShortestJobFirst};
pub use report::RunReport;
pub use round_robin::RoundRobin;
pub use stats::{RunSummary, StatsAggregator};
pub use traits::Algorithm;
pub use types::{Policy, Quantum};

use crate::core::errors::{SchedResult, SchedulerError};
use crate::monitoring::RunSpan;
use crate::process::ProcessRegistry;
use tracing::{info, warn};

/// Scheduling simulator
///
/// Single owner of the process registry: every mutation goes through here,
/// so a run always starts from a reset, freshly ordered registry.
#[derive(Debug)]
pub struct Scheduler {
    registry: ProcessRegistry,
    stats: StatsAggregator,
    config: SchedulerConfig,
}

impl Scheduler {
    /// Scheduler over the canonical seed set
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_registry(ProcessRegistry::seeded(), config)
    }

    /// Scheduler over a caller-supplied registry
    pub fn with_registry(registry: ProcessRegistry, config: SchedulerConfig) -> Self {
        info!(
            clock_model = config.clock_model.as_str(),
            quantum = config.default_quantum.get(),
            processes = registry.len(),
            "Scheduler initialized"
        );

        Self {
            registry: registry.with_limit(config.max_processes),
            stats: StatsAggregator::new(),
            config,
        }
    }

    #[inline]
    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// Registry access for manager-style edits between runs
    #[inline]
    pub fn registry_mut(&mut self) -> &mut ProcessRegistry {
        &mut self.registry
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Shared handle to the last-run statistics
    #[inline]
    pub fn stats(&self) -> StatsAggregator {
        self.stats.clone()
    }

    #[inline]
    pub fn last_summary(&self) -> Option<RunSummary> {
        self.stats.last_summary()
    }

    /// Run a policy; round-robin uses the configured default quantum
    pub fn run(&mut self, policy: Policy) -> SchedResult<RunReport> {
        match policy {
            Policy::Fcfs => self.fcfs(),
            Policy::Sjf => self.sjf(),
            Policy::RoundRobin => self.execute(&RoundRobin::new(self.config.default_quantum)),
            Policy::Priority => self.priority(),
        }
    }

    pub fn fcfs(&mut self) -> SchedResult<RunReport> {
        self.execute(&FirstComeFirstServe)
    }

    pub fn sjf(&mut self) -> SchedResult<RunReport> {
        self.execute(&ShortestJobFirst)
    }

    /// Round-robin with an explicit quantum
    ///
    /// The quantum is validated before the registry is touched.
    pub fn round_robin(&mut self, quantum: i64) -> SchedResult<RunReport> {
        let quantum = Quantum::new(quantum).map_err(|e| {
            warn!(quantum, "Rejected round-robin quantum");
            e
        })?;
        self.execute(&RoundRobin::new(quantum))
    }

    pub fn priority(&mut self) -> SchedResult<RunReport> {
        self.execute(&PriorityFirst)
    }

    /// Reset, order, drive to completion, aggregate
    pub fn execute(&mut self, algorithm: &dyn Algorithm) -> SchedResult<RunReport> {
        let policy = algorithm.policy();

        self.registry.reset();
        if self.registry.is_empty() {
            warn!(policy = policy.as_str(), "No processes to schedule");
            return Err(SchedulerError::EmptyRegistry);
        }

        if context::time_bound(self.registry.all()).is_none() {
            warn!(
                policy = policy.as_str(),
                processes = self.registry.len(),
                "Workload exceeds the simulated time range"
            );
            return Err(SchedulerError::TimeOverflow {
                processes: self.registry.len(),
            });
        }

        let span = RunSpan::new(policy.as_str(), self.registry.len());
        let _entered = span.enter();

        self.registry.order_by(policy.sort_key());

        let mut ctx = RunContext::new(&self.config);
        algorithm.execute(self.registry.processes_mut(), &mut ctx);

        let processes = self.registry.all();
        debug_assert!(processes
            .iter()
            .all(|p| p.is_terminal() && p.work_done == p.burst_time));

        let total_turnaround = processes.iter().map(|p| p.turnaround_time).sum();
        let total_waiting = processes.iter().map(|p| p.waiting_time).sum();

        let summary = match self
            .stats
            .record_run(total_turnaround, total_waiting, processes.len())
        {
            Ok(summary) => summary,
            Err(e) => {
                span.record_error(&e.to_string());
                return Err(e);
            }
        };
        span.record_summary(summary.average_turnaround, summary.average_waiting);

        info!(
            policy = policy.as_str(),
            preemptive = policy.is_preemptive(),
            processes = summary.process_count,
            avg_turnaround = summary.average_turnaround,
            avg_waiting = summary.average_waiting,
            "Run complete"
        );

        let (events, timeline) = ctx.into_parts();
        Ok(RunReport {
            run_id: span.run_id().to_string(),
            policy,
            quantum: algorithm.quantum(),
            clock_model: self.config.clock_model,
            events,
            timeline,
            processes: processes.to_vec(),
            summary,
        })
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessSpec, ProcessState};

    #[test]
    fn test_fcfs_summary() {
        let mut scheduler = Scheduler::default();
        let report = scheduler.fcfs().unwrap();

        assert_eq!(report.summary.total_turnaround, 183);
        assert_eq!(report.summary.total_waiting, 122);
        assert_eq!(report.summary.average_turnaround, 30.5);
        assert_eq!(scheduler.last_summary(), Some(report.summary));
        assert_eq!(report.completion_order(), vec![10, 20, 50, 40, 30, 60]);
        assert_eq!(report.makespan(), 61);
    }

    #[test]
    fn test_empty_registry() {
        let mut scheduler = Scheduler::with_registry(ProcessRegistry::empty(), SchedulerConfig::default());
        for policy in Policy::ALL {
            assert_eq!(scheduler.run(policy).unwrap_err(), SchedulerError::EmptyRegistry);
        }
        assert_eq!(scheduler.last_summary(), None);
    }

    #[test]
    fn test_invalid_quantum_leaves_registry_untouched() {
        let mut scheduler = Scheduler::default();
        scheduler.sjf().unwrap();
        let before = scheduler.registry().all().to_vec();

        assert_eq!(
            scheduler.round_robin(0).unwrap_err(),
            SchedulerError::InvalidQuantum(0)
        );
        assert_eq!(scheduler.registry().all(), before.as_slice());
    }

    #[test]
    fn test_run_uses_default_quantum() {
        let config = SchedulerConfig::default().with_quantum(Quantum::new(4).unwrap());
        let mut scheduler = Scheduler::new(config);
        let report = scheduler.run(Policy::RoundRobin).unwrap();
        assert_eq!(report.quantum, Some(Quantum::new(4).unwrap()));
        assert_eq!(report.summary.total_waiting, 145);
    }

    #[test]
    fn test_each_run_starts_from_reset() {
        let mut scheduler = Scheduler::default();
        scheduler
            .registry_mut()
            .transition(10, ProcessState::Ready, ProcessState::Running)
            .unwrap();
        let first = scheduler.priority().unwrap();
        let second = scheduler.priority().unwrap();
        assert_eq!(first.processes, second.processes);
    }

    #[test]
    fn test_limit_from_config() {
        let config = SchedulerConfig {
            max_processes: Some(6),
            ..SchedulerConfig::default()
        };
        let mut scheduler = Scheduler::new(config);
        assert_eq!(
            scheduler.registry_mut().create(ProcessSpec::new(70, 0, 0, 1)),
            Err(SchedulerError::RegistryFull { limit: 6 })
        );
    }
}
