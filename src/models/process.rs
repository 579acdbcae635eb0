//! Process model.
//!
//! A process is a single CPU burst to be scheduled. It becomes eligible
//! at its arrival time and needs `burst_time` units of CPU to complete.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Label reserved for spans in which no process holds the CPU.
pub const IDLE_LABEL: &str = "Idle";

/// A process (unit of CPU work) to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Display label (e.g. "P1"). Never used for scheduling decisions.
    pub job: String,
    /// Position in the caller's input arrays. Final tie-breaker.
    pub index: usize,
    /// Time at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(job: impl Into<String>, index: usize, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            job: job.into(),
            index,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Default label for the process at `index` ("P1" for index 0).
    pub fn default_label(index: usize) -> String {
        format!("P{}", index + 1)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
