/*!
 * Seed Data
 * Canonical process set the registry starts from
 */

use super::types::Process;
use crate::core::types::{Pid, Priority, SimTime};

/// (id, priority, arrival_time, burst_time)
pub const SEED: [(Pid, Priority, SimTime, SimTime); 6] = [
    (10, 2, 0, 6),
    (20, 4, 2, 20),
    (30, 6, 8, 10),
    (40, 8, 6, 4),
    (50, 0, 4, 8),
    (60, 1, 10, 13),
];

/// Fresh copy of the canonical seed set, in registry order
pub fn seed_processes() -> Vec<Process> {
    SEED.iter()
        .map(|&(id, priority, arrival, burst)| Process::new(id, priority, arrival, burst))
        .collect()
}
