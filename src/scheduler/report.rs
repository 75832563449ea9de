/*!
 * Run Report
 * Everything an output sink needs about one completed run
 */

use super::config::ClockModel;
use super::stats::RunSummary;
use super::types::{Policy, Quantum};
use crate::core::types::{Pid, SimTime};
use crate::monitoring::{Slice, TransitionEvent};
use crate::process::{Process, ProcessState};
use serde::{Deserialize, Serialize};

/// Result of one scheduling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Quantum>,
    pub clock_model: ClockModel,
    /// State changes in the order they happened
    pub events: Vec<TransitionEvent>,
    /// CPU slices in execution order
    pub timeline: Vec<Slice>,
    /// Final process table, in the order the policy sorted it
    pub processes: Vec<Process>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn process(&self, id: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Pids in the order they reached the terminal state
    pub fn completion_order(&self) -> Vec<Pid> {
        self.events
            .iter()
            .filter(|e| e.to == ProcessState::Blocked)
            .map(|e| e.pid)
            .collect()
    }

    /// Clock value when the last slice ended
    pub fn makespan(&self) -> SimTime {
        self.timeline.iter().map(Slice::end).max().unwrap_or(0)
    }
}
