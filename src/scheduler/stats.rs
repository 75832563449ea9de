/*!
 * Statistics Aggregator
 * Per-run totals and averages, retained as the "last run" summary
 */

use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::SimTime;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Averages of one completed run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub process_count: usize,
    pub total_turnaround: SimTime,
    pub total_waiting: SimTime,
    pub average_turnaround: f64,
    pub average_waiting: f64,
}

/// Last-run statistics
///
/// Clones share the same slot, so a reporter can hold a handle while the
/// scheduler overwrites it after every run. Never accumulates across runs.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    last: Arc<RwLock<Option<RunSummary>>>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute averages for a run and store them as the last summary
    ///
    /// A zero count is rejected rather than producing NaN averages; the
    /// previous summary is left untouched in that case.
    pub fn record_run(
        &self,
        total_turnaround: SimTime,
        total_waiting: SimTime,
        count: usize,
    ) -> SchedResult<RunSummary> {
        if count == 0 {
            return Err(SchedulerError::EmptyRegistry);
        }

        let summary = RunSummary {
            process_count: count,
            total_turnaround,
            total_waiting,
            average_turnaround: total_turnaround as f64 / count as f64,
            average_waiting: total_waiting as f64 / count as f64,
        };
        *self.last.write() = Some(summary);
        Ok(summary)
    }

    /// Most recent summary, or `None` before the first completed run
    pub fn last_summary(&self) -> Option<RunSummary> {
        *self.last.read()
    }
}
