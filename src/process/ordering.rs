/*!
 * Ordering Service
 * Stable ascending sort of process records by a selected key
 */

use super::types::Process;
use crate::core::types::SimTime;
use serde::{Deserialize, Serialize};

/// Field a process sequence can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    ArrivalTime,
    BurstTime,
    Priority,
}

impl SortKey {
    /// Extract the key value from a process
    #[inline(always)]
    pub fn extract(self, process: &Process) -> SimTime {
        match self {
            Self::ArrivalTime => process.arrival_time,
            Self::BurstTime => process.burst_time,
            Self::Priority => SimTime::from(process.priority),
        }
    }
}

/// Sort in place, ascending by `key`
///
/// `sort_by_key` on slices is stable, so equal keys keep their relative
/// order. Algorithms rely on that for deterministic tie-breaking.
pub fn sort_by_key(processes: &mut [Process], key: SortKey) {
    processes.sort_by_key(|p| key.extract(p));
}

/// Sorted copy, leaving the input untouched
#[must_use]
pub fn sorted(processes: &[Process], key: SortKey) -> Vec<Process> {
    let mut out = processes.to_vec();
    sort_by_key(&mut out, key);
    out
}

/// Check whether a sequence is already ascending by `key`
pub fn is_sorted_by(processes: &[Process], key: SortKey) -> bool {
    processes
        .windows(2)
        .all(|w| key.extract(&w[0]) <= key.extract(&w[1]))
}
