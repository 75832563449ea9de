/*!
 * Scheduler Types
 * Policy selection and time quantum
 */

use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::types::SimTime;
use crate::process::SortKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come-first-serve, run to completion in arrival order
    Fcfs,
    /// Non-preemptive shortest job first
    Sjf,
    /// Round-robin with a fixed quantum
    RoundRobin,
    /// Non-preemptive priority (lower value first)
    Priority,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Self::Fcfs, Self::Sjf, Self::RoundRobin, Self::Priority];

    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - used for span fields and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
        }
    }

    /// Key the registry is ordered by before the run
    #[inline]
    pub const fn sort_key(&self) -> SortKey {
        match self {
            Self::Fcfs | Self::RoundRobin => SortKey::ArrivalTime,
            Self::Sjf => SortKey::BurstTime,
            Self::Priority => SortKey::Priority,
        }
    }

    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_serve" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "rr" | "rrs" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "pri" | "prio" | "priority" => Ok(Self::Priority),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjf, round_robin, priority",
                s
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantum(SimTime);

impl Quantum {
    /// Quantum used when none is given
    pub const DEFAULT: Quantum = Quantum(2);

    /// Create a validated quantum
    pub fn new(ticks: i64) -> SchedResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn get(&self) -> SimTime {
        self.0
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("SJF".parse::<Policy>().unwrap(), Policy::Sjf);
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!("pri".parse::<Policy>().unwrap(), Policy::Priority);
        assert!("lottery".parse::<Policy>().is_err());
    }

    #[test]
    fn test_only_round_robin_preempts() {
        let preemptive: Vec<_> = Policy::ALL.into_iter().filter(Policy::is_preemptive).collect();
        assert_eq!(preemptive, vec![Policy::RoundRobin]);
    }

    #[test]
    fn test_policy_serde_roundtrip() {
        for policy in Policy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
            assert_eq!(serde_json::from_str::<Policy>(&json).unwrap(), policy);
        }
    }

    #[test]
    fn test_quantum_validation() {
        assert_eq!(Quantum::new(0), Err(SchedulerError::InvalidQuantum(0)));
        assert_eq!(Quantum::new(-3), Err(SchedulerError::InvalidQuantum(-3)));
        assert_eq!(Quantum::new(4).unwrap().get(), 4);
        assert!(serde_json::from_str::<Quantum>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantum>("5").unwrap().get(), 5);
    }
}
