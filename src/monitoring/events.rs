/*!
 * Scheduling Events
 * State-transition events and execution slices emitted by a run
 */

use crate::core::types::{Pid, SimTime};
use crate::process::ProcessState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single process state change observed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Simulated clock when the change happened
    pub clock: SimTime,
    pub pid: Pid,
    pub from: ProcessState,
    pub to: ProcessState,
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:<4} pid {:<6} {} ({}) -> {} ({})",
            self.clock,
            self.pid,
            self.from.as_str(),
            self.from.code(),
            self.to.as_str(),
            self.to.code()
        )
    }
}

/// One contiguous stretch of CPU time given to a process
///
/// Together the slices of a run form its Gantt chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: SimTime,
    pub duration: SimTime,
    /// Other eligible, non-terminal processes at the slice start
    pub waiting_peers: usize,
}

impl Slice {
    #[inline]
    pub const fn end(&self) -> SimTime {
        self.start + self.duration
    }
}
