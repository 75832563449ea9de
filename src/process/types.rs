/*!
 * Process Types
 * Process records, states and user-supplied specs
 */

use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::{Pid, Priority, SimTime, MAX_PID, MAX_TIME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process state
///
/// Numeric codes: Blocked = -1, Ready = 0, Running = 1.
/// Within a scheduling run Blocked is the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Finished for this run (or blocked, for manual state changes)
    Blocked,
    /// Eligible to run
    Ready,
    /// Currently holding the simulated CPU
    Running,
}

impl ProcessState {
    pub const ALL: [ProcessState; 3] = [Self::Blocked, Self::Ready, Self::Running];

    /// Numeric state code
    #[inline(always)]
    pub const fn code(self) -> i8 {
        match self {
            Self::Blocked => -1,
            Self::Ready => 0,
            Self::Running => 1,
        }
    }

    /// Parse a numeric state code
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Blocked),
            0 => Some(Self::Ready),
            1 => Some(Self::Running),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Ready => "ready",
            Self::Running => "running",
        }
    }

    /// Dense index used by the transition table
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        (self.code() + 1) as usize
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schedulable process record
///
/// Timing fields are derived: they are zeroed by [`Process::reset`] and
/// filled in by the scheduling algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: Pid,
    pub state: ProcessState,
    pub priority: Priority,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub finish_time: SimTime,
    pub turnaround_time: SimTime,
    pub waiting_time: SimTime,
    pub work_done: SimTime,
}

impl Process {
    #[inline]
    #[must_use]
    pub fn new(id: Pid, priority: Priority, arrival_time: SimTime, burst_time: SimTime) -> Self {
        Self {
            id,
            state: ProcessState::Ready,
            priority,
            arrival_time,
            burst_time,
            finish_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            work_done: 0,
        }
    }

    /// Return to the initial state: Ready with all derived fields zeroed
    pub fn reset(&mut self) {
        self.state = ProcessState::Ready;
        self.finish_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.work_done = 0;
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.state, ProcessState::Blocked)
    }

    /// Arrived by `clock` and not yet finished
    ///
    /// # Performance
    /// Hot path - checked for every process on every scheduling step
    #[inline(always)]
    #[must_use]
    pub const fn is_eligible(&self, clock: SimTime) -> bool {
        !self.is_terminal() && self.arrival_time <= clock
    }

    #[inline(always)]
    #[must_use]
    pub const fn remaining(&self) -> SimTime {
        self.burst_time - self.work_done
    }

    /// Account `duration` ticks of executed work
    pub(crate) fn run_for(&mut self, duration: SimTime) {
        self.work_done += duration;
        debug_assert!(
            self.work_done <= self.burst_time,
            "process {} overran its burst",
            self.id
        );
    }

    /// Stamp the finish time and derive the turnaround time
    pub(crate) fn complete(&mut self, finish_time: SimTime) {
        self.finish_time = finish_time;
        self.turnaround_time = finish_time - self.arrival_time;
    }
}

/// User-supplied process record
///
/// Used for the manager-style `create` command and for workload files.
/// The id is wide so that out-of-range input can be rejected with
/// [`SchedulerError::InvalidId`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: i64,
    #[serde(default)]
    pub priority: Priority,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
}

impl ProcessSpec {
    pub const fn new(id: i64, priority: Priority, arrival_time: SimTime, burst_time: SimTime) -> Self {
        Self {
            id,
            priority,
            arrival_time,
            burst_time,
        }
    }

    /// Check id range and timing, returning the validated pid
    pub fn validate(&self) -> SchedResult<Pid> {
        if self.id < 0 || self.id >= MAX_PID {
            return Err(SchedulerError::InvalidId(self.id));
        }
        let id = self.id as Pid;

        if !(0..=MAX_TIME).contains(&self.arrival_time)
            || !(1..=MAX_TIME).contains(&self.burst_time)
        {
            return Err(SchedulerError::InvalidTiming {
                id,
                arrival: self.arrival_time,
                burst: self.burst_time,
            });
        }

        Ok(id)
    }

    /// Validate and build a fresh process
    pub fn into_process(self) -> SchedResult<Process> {
        let id = self.validate()?;
        Ok(Process::new(id, self.priority, self.arrival_time, self.burst_time))
    }
}
