/*!
 * Run Context
 * Simulated clock plus the events and slices recorded during one run
 */

use super::config::{ClockModel, RoundRobinFinish, SchedulerConfig};
use crate::core::types::{Pid, SimTime};
use crate::monitoring::{Slice, TransitionEvent};
use crate::process::{transitions, Process, ProcessState};
use tracing::trace;

/// Mutable state threaded through an algorithm run
#[derive(Debug)]
pub struct RunContext {
    pub(crate) clock: SimTime,
    clock_model: ClockModel,
    clamp_negative_waiting: bool,
    round_robin_finish: RoundRobinFinish,
    events: Vec<TransitionEvent>,
    timeline: Vec<Slice>,
}

impl RunContext {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            clock: 0,
            clock_model: config.clock_model,
            clamp_negative_waiting: config.clamp_negative_waiting,
            round_robin_finish: config.round_robin_finish,
            events: Vec::new(),
            timeline: Vec::new(),
        }
    }

    #[inline]
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    #[inline]
    pub fn clock_model(&self) -> ClockModel {
        self.clock_model
    }

    #[inline]
    pub fn round_robin_finish(&self) -> RoundRobinFinish {
        self.round_robin_finish
    }

    /// Move a process to `to`, recording the event at the current clock
    pub fn transition(&mut self, process: &mut Process, to: ProcessState) {
        let from = process.state;
        debug_assert!(
            transitions::is_allowed(from, to),
            "illegal transition {:?} -> {:?} for process {}",
            from,
            to,
            process.id
        );

        process.state = to;
        self.events.push(TransitionEvent {
            clock: self.clock,
            pid: process.id,
            from,
            to,
        });
        trace!(clock = self.clock, pid = process.id, from = from.as_str(), to = to.as_str(), "transition");
    }

    /// Append a CPU slice to the timeline
    pub fn record_slice(&mut self, pid: Pid, start: SimTime, duration: SimTime, waiting_peers: usize) {
        self.timeline.push(Slice {
            pid,
            start,
            duration,
            waiting_peers,
        });
    }

    /// Apply the configured clamp to a computed waiting time
    #[inline]
    pub fn waiting(&self, raw: SimTime) -> SimTime {
        if self.clamp_negative_waiting {
            raw.max(0)
        } else {
            raw
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<TransitionEvent>, Vec<Slice>) {
        (self.events, self.timeline)
    }
}

/// Bound on every clock value and every per-run total, `None` if it
/// does not fit in [`SimTime`]
///
/// No clock passes the last arrival plus the sum of all bursts (the
/// horizon), and each of the `n` processes contributes at most one horizon
/// to a total. The reference SJF/priority clock adds every finish time, so
/// it stays below `max_arrival + n * horizon`.
pub(crate) fn time_bound(processes: &[Process]) -> Option<SimTime> {
    let max_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst_time))?;
    let count = SimTime::try_from(processes.len()).ok()?;
    count.checked_mul(horizon)?.checked_add(max_arrival)
}

/// Other processes eligible at `clock`, excluding `index`
pub(crate) fn waiting_peers(processes: &[Process], index: usize, clock: SimTime) -> usize {
    processes
        .iter()
        .enumerate()
        .filter(|(j, p)| *j != index && p.is_eligible(clock))
        .count()
}

/// Earliest arrival among processes that have not finished
pub(crate) fn next_arrival(processes: &[Process]) -> Option<SimTime> {
    processes
        .iter()
        .filter(|p| !p.is_terminal())
        .map(|p| p.arrival_time)
        .min()
}
