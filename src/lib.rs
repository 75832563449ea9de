/*!
 * CPU Scheduling Simulator Library
 * Process registry, scheduling policies and reporting exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod output;
pub mod process;
pub mod scheduler;
pub mod shell;

// Re-exports
pub use crate::core::errors::{SchedResult, SchedulerError};
pub use crate::core::types::{Pid, Priority, SimTime};
pub use monitoring::init_tracing;
pub use output::{sink_for, JsonSink, OutputFormat, OutputSink, TableSink};
pub use process::{Process, ProcessRegistry, ProcessSpec, ProcessState, SortKey};
pub use scheduler::{
    ClockModel, Policy, Quantum, RoundRobinFinish, RunReport, RunSummary, Scheduler,
    SchedulerConfig, StatsAggregator,
};
pub use shell::{Command, Flow, Shell};
