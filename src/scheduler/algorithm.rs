//! Closed set of supported disciplines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::algorithms::{
    CpuScheduler, Fcfs, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, Sjf, Srtf,
};
use crate::error::ParseAlgorithmError;

/// Scheduling discipline tag.
///
/// Serializes as its short tag (`"FCFS"`, `"SJF"`, `"SRTF"`, `"RR"`, `"PNP"`, `"PP"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First come, first served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job first (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest remaining time first.
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round robin.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Priority, non-preemptive.
    #[serde(rename = "PNP")]
    PriorityNonPreemptive,
    /// Priority, preemptive.
    #[serde(rename = "PP")]
    PriorityPreemptive,
}

impl Algorithm {
    /// Every supported discipline.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];

    /// Short tag.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
            Algorithm::PriorityNonPreemptive => "PNP",
            Algorithm::PriorityPreemptive => "PP",
        }
    }

    /// Long, human-readable name.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come First Serve",
            Algorithm::Sjf => "Shortest Job First (non-preemptive)",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::PriorityNonPreemptive => "Priority (non-preemptive)",
            Algorithm::PriorityPreemptive => "Priority (preemptive)",
        }
    }

    /// Whether the discipline needs a time quantum.
    pub fn requires_time_quantum(self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Whether the discipline needs priorities.
    pub fn requires_priorities(self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::RoundRobin | Algorithm::PriorityPreemptive
        )
    }

    /// The scheduler implementing this discipline.
    ///
    /// `time_quantum` is only read by round robin.
    pub fn scheduler(self, time_quantum: i64) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(time_quantum)),
            Algorithm::PriorityNonPreemptive => Box::new(PriorityNonPreemptive),
            Algorithm::PriorityPreemptive => Box::new(PriorityPreemptive),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a short tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseAlgorithmError(tag.to_string()))
    }
}
