/*!
 * Process Registry
 * Owns the schedulable process set and its reset baseline
 */

use super::ordering::{self, SortKey};
use super::seed::seed_processes;
use super::transitions;
use super::types::{Process, ProcessSpec, ProcessState};
use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::Pid;
use std::path::Path;
use tracing::{debug, info};

/// Process registry
///
/// Holds two sequences: the baseline (pristine records, in creation order)
/// and the live set that algorithms sort and mutate. `reset()` rebuilds the
/// live set from the baseline. The baseline is the canonical seed set until
/// it is edited with `create` / `terminate` or replaced by a workload.
#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    baseline: Vec<Process>,
    processes: Vec<Process>,
    max_processes: Option<usize>,
}

impl ProcessRegistry {
    /// Registry populated with the canonical seed set
    pub fn seeded() -> Self {
        let baseline = seed_processes();
        Self {
            processes: baseline.clone(),
            baseline,
            max_processes: None,
        }
    }

    /// Registry with no processes
    pub fn empty() -> Self {
        Self {
            baseline: Vec::new(),
            processes: Vec::new(),
            max_processes: None,
        }
    }

    /// Build a registry whose baseline is a validated list of specs
    pub fn from_specs<I>(specs: I) -> SchedResult<Self>
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        let mut registry = Self::empty();
        for spec in specs {
            registry.create(spec)?;
        }
        Ok(registry)
    }

    /// Load a workload file: a JSON array of process specs
    pub fn load_json(path: impl AsRef<Path>) -> SchedResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SchedulerError::Workload(format!("{}: {}", path.display(), e)))?;
        let specs: Vec<ProcessSpec> = serde_json::from_str(&contents)?;
        let registry = Self::from_specs(specs)?;
        info!(
            path = %path.display(),
            processes = registry.len(),
            "Loaded workload"
        );
        Ok(registry)
    }

    /// Cap the number of processes `create` accepts
    pub fn with_limit(mut self, max_processes: Option<usize>) -> Self {
        self.max_processes = max_processes;
        self
    }

    /// Rebuild the live set from the baseline with all derived fields zeroed
    pub fn reset(&mut self) {
        self.processes.clear();
        self.processes.extend(self.baseline.iter().cloned());
        for p in &mut self.processes {
            p.reset();
        }
    }

    /// Replace the baseline with the canonical seed set and reset
    pub fn restore_seed(&mut self) {
        self.baseline = seed_processes();
        self.reset();
        info!(processes = self.baseline.len(), "Restored seed set");
    }

    /// Full live sequence in its current order
    #[inline]
    pub fn all(&self) -> &[Process] {
        &self.processes
    }

    /// Baseline records in creation order
    #[inline]
    pub fn baseline(&self) -> &[Process] {
        &self.baseline
    }

    #[inline]
    pub fn get(&self, id: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Stable-sort the live set by `key`
    pub fn order_by(&mut self, key: SortKey) {
        ordering::sort_by_key(&mut self.processes, key);
    }

    /// Mutable access for the scheduling algorithms
    ///
    /// A slice, so algorithms can mutate records but never add or remove them.
    pub(crate) fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Validate a spec and append it to the baseline and the live set
    pub fn create(&mut self, spec: ProcessSpec) -> SchedResult<Pid> {
        let id = spec.validate()?;

        if self.baseline.iter().any(|p| p.id == id) {
            return Err(SchedulerError::DuplicateId(id));
        }

        if let Some(limit) = self.max_processes {
            if self.baseline.len() >= limit {
                return Err(SchedulerError::RegistryFull { limit });
            }
        }

        let process = spec.into_process()?;
        self.baseline.push(process.clone());
        self.processes.push(process);

        info!(
            pid = id,
            priority = spec.priority,
            arrival = spec.arrival_time,
            burst = spec.burst_time,
            "Created process"
        );
        Ok(id)
    }

    /// Manually move a process from `from` to `to`
    ///
    /// `from` must match the live state and the pair must be allowed by the
    /// transition table.
    pub fn transition(&mut self, id: Pid, from: ProcessState, to: ProcessState) -> SchedResult<()> {
        let process = self
            .processes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SchedulerError::ProcessNotFound(id))?;

        if process.state != from {
            return Err(SchedulerError::StateMismatch {
                id,
                expected: from,
                actual: process.state,
            });
        }

        transitions::check(from, to)?;
        process.state = to;

        debug!(pid = id, from = from.as_str(), to = to.as_str(), "Manual transition");
        Ok(())
    }

    /// Remove a process from the baseline and the live set
    pub fn terminate(&mut self, id: Pid) -> SchedResult<Process> {
        let index = self
            .baseline
            .iter()
            .position(|p| p.id == id)
            .ok_or(SchedulerError::ProcessNotFound(id))?;
        let removed = self.baseline.remove(index);
        self.processes.retain(|p| p.id != id);

        info!(pid = id, remaining = self.baseline.len(), "Terminated process");
        Ok(removed)
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
