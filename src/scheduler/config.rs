/*!
 * Scheduler Configuration
 *
 * Clock model selection and run defaults, with environment overrides
 */

use super::types::Quantum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// How the simulated clock advances in the non-preemptive algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockModel {
    /// Single clock: a process starts when the CPU is free and it has
    /// arrived, and the clock moves to its finish time
    Corrected,
    /// Legacy formulas: finish and waiting chain off the previous finish,
    /// SJF/priority add the whole finish time to the eligibility clock
    Reference,
}

impl ClockModel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corrected => "corrected",
            Self::Reference => "reference",
        }
    }
}

impl FromStr for ClockModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corrected" | "fixed" => Ok(Self::Corrected),
            "reference" | "legacy" => Ok(Self::Reference),
            _ => Err(format!(
                "Invalid clock model '{}'. Valid: corrected, reference",
                s
            )),
        }
    }
}

/// How round-robin stamps the finish time of a completed process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundRobinFinish {
    /// `finish = waiting + burst`
    #[default]
    WaitingPlusBurst,
    /// Clock value when the last slice ends
    Clock,
}

impl RoundRobinFinish {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingPlusBurst => "waiting_plus_burst",
            Self::Clock => "clock",
        }
    }
}

impl FromStr for RoundRobinFinish {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting_plus_burst" | "waiting" => Ok(Self::WaitingPlusBurst),
            "clock" => Ok(Self::Clock),
            _ => Err(format!(
                "Invalid round-robin finish rule '{}'. Valid: waiting_plus_burst, clock",
                s
            )),
        }
    }
}

/// Scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub clock_model: ClockModel,
    /// Store negative waiting times as zero
    pub clamp_negative_waiting: bool,
    /// Finish-time rule for round-robin, independent of the clock model
    pub round_robin_finish: RoundRobinFinish,
    /// Quantum used by `run(Policy::RoundRobin)`
    pub default_quantum: Quantum,
    /// Upper bound on registered processes (`None` = unbounded)
    pub max_processes: Option<usize>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            clock_model: ClockModel::Corrected,
            clamp_negative_waiting: false,
            round_robin_finish: RoundRobinFinish::WaitingPlusBurst,
            default_quantum: Quantum::DEFAULT,
            max_processes: None,
        }
    }
}

impl SchedulerConfig {
    /// Legacy clock formulas with a 100-process cap
    pub const fn reference() -> Self {
        Self {
            clock_model: ClockModel::Reference,
            clamp_negative_waiting: false,
            round_robin_finish: RoundRobinFinish::WaitingPlusBurst,
            default_quantum: Quantum::DEFAULT,
            max_processes: Some(100),
        }
    }

    pub const fn with_clock_model(mut self, clock_model: ClockModel) -> Self {
        self.clock_model = clock_model;
        self
    }

    pub const fn with_round_robin_finish(mut self, rule: RoundRobinFinish) -> Self {
        self.round_robin_finish = rule;
        self
    }

    pub const fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp_negative_waiting = clamp;
        self
    }

    pub const fn with_quantum(mut self, quantum: Quantum) -> Self {
        self.default_quantum = quantum;
        self
    }

    /// Defaults overridden by environment variables
    ///
    /// Environment variables:
    /// - SCHED_CLOCK_MODEL: corrected | reference
    /// - SCHED_CLAMP_WAITING: 1 | true to clamp negative waiting times
    /// - SCHED_RR_FINISH: waiting_plus_burst | clock
    /// - SCHED_QUANTUM: default round-robin quantum (> 0)
    /// - SCHED_MAX_PROCESSES: process limit for `create`
    ///
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SCHED_CLOCK_MODEL") {
            match value.parse() {
                Ok(model) => config = config.with_clock_model(model),
                Err(e) => warn!(error = %e, "Ignoring SCHED_CLOCK_MODEL"),
            }
        }

        if let Some(value) = lookup("SCHED_CLAMP_WAITING") {
            config.clamp_negative_waiting = value == "1" || value.eq_ignore_ascii_case("true");
        }

        if let Some(value) = lookup("SCHED_RR_FINISH") {
            match value.parse() {
                Ok(rule) => config = config.with_round_robin_finish(rule),
                Err(e) => warn!(error = %e, "Ignoring SCHED_RR_FINISH"),
            }
        }

        if let Some(value) = lookup("SCHED_QUANTUM") {
            match value.parse::<i64>().map_err(|e| e.to_string()).and_then(|q| {
                Quantum::new(q).map_err(|e| e.to_string())
            }) {
                Ok(quantum) => config.default_quantum = quantum,
                Err(e) => warn!(value = %value, error = %e, "Ignoring SCHED_QUANTUM"),
            }
        }

        if let Some(value) = lookup("SCHED_MAX_PROCESSES") {
            match value.parse::<usize>() {
                Ok(limit) => config.max_processes = Some(limit),
                Err(e) => warn!(value = %value, error = %e, "Ignoring SCHED_MAX_PROCESSES"),
            }
        }

        config
    }
}
