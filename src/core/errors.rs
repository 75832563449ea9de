/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, SimTime};
use crate::process::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler operation result
///
/// # Must Use
/// Every registry mutation and scheduling run can fail and must be handled
pub type SchedResult<T> = Result<T, SchedulerError>;

/// Scheduler and registry errors with serialization support
///
/// None of these is fatal: the caller may retry with corrected input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid time quantum: {0} (must be > 0)")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-robin needs a positive integer quantum, e.g. `rr 4`.")
    )]
    InvalidQuantum(i64),

    #[error("No processes to schedule")]
    #[diagnostic(
        code(scheduler::empty_registry),
        help("Averages are undefined for an empty run. Create processes or restore the seed set.")
    )]
    EmptyRegistry,

    #[error("Process {0} already exists")]
    #[diagnostic(
        code(registry::duplicate_id),
        help("Process ids must be unique within the registry.")
    )]
    DuplicateId(Pid),

    #[error("Invalid process id: {0}")]
    #[diagnostic(
        code(registry::invalid_id),
        help("Process ids must be >= 0 and below 2147483647.")
    )]
    InvalidId(i64),

    #[error("Process {0} not found")]
    #[diagnostic(
        code(registry::not_found),
        help("Use `show` to list the registered processes.")
    )]
    ProcessNotFound(Pid),

    #[error("Invalid timing for process {id}: arrival {arrival}, burst {burst}")]
    #[diagnostic(
        code(registry::invalid_timing),
        help("Arrival time must be in 0..=2147483647 and burst time in 1..=2147483647.")
    )]
    InvalidTiming {
        id: Pid,
        arrival: SimTime,
        burst: SimTime,
    },

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    #[diagnostic(
        code(process::invalid_transition),
        help("Allowed: Blocked -> Ready, Ready -> Running, Running -> Ready, Running -> Blocked.")
    )]
    InvalidStateTransition {
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Process {id} is {actual:?}, not {expected:?}")]
    #[diagnostic(
        code(process::state_mismatch),
        help("The current state given must match the process's live state.")
    )]
    StateMismatch {
        id: Pid,
        expected: ProcessState,
        actual: ProcessState,
    },

    #[error("Process limit reached: {limit}")]
    #[diagnostic(
        code(registry::full),
        help("Terminate unused processes or raise SCHED_MAX_PROCESSES.")
    )]
    RegistryFull { limit: usize },

    #[error("Simulated time would overflow for {processes} processes")]
    #[diagnostic(
        code(scheduler::time_overflow),
        help("Shorten arrival or burst times, or split the workload.")
    )]
    TimeOverflow { processes: usize },

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(registry::workload),
        help("Workload files are JSON arrays of objects with id, priority, arrival_time and burst_time.")
    )]
    Workload(String),
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Workload(err.to_string())
    }
}

impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        SchedulerError::Workload(err.to_string())
    }
}
