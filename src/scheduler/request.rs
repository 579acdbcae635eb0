//! Scheduling request and dispatcher.
//!
//! # Algorithm
//!
//! 1. Validate the request (lengths, bursts, arrivals, quantum, priorities,
//!    time horizon).
//! 2. Zip the input arrays into processes, labelled `P1..Pn` by default.
//! 3. Hand the processes to the scheduler selected by the algorithm tag.
//!
//! The selected scheduler's output is returned unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Algorithm;
use crate::error::{Result, SolveError};
use crate::models::{Process, Solution};
use crate::validation::validate_request;

/// Input container for one scheduling run.
///
/// Arrays are index-aligned: the i-th arrival time, burst time, priority and
/// label belong to the i-th process.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::{Algorithm, SolveRequest};
///
/// let solution = SolveRequest::new(Algorithm::RoundRobin, vec![0, 1, 2], vec![4, 3, 2])
///     .with_time_quantum(2)
///     .solve()
///     .unwrap();
///
/// assert_eq!(solution.metrics_for_job("P1").map(|m| m.finish_time), Some(8));
/// assert_eq!(solution.metrics_for_job("P2").map(|m| m.finish_time), Some(9));
/// assert_eq!(solution.metrics_for_job("P3").map(|m| m.finish_time), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Discipline to run.
    pub algorithm: Algorithm,
    /// Arrival time per process (non-negative).
    pub arrival_times: Vec<i64>,
    /// Burst time per process (positive).
    pub burst_times: Vec<i64>,
    /// Time quantum (round robin only).
    #[serde(default)]
    pub time_quantum: Option<i64>,
    /// Priority per process, lower = more important (priority disciplines only).
    #[serde(default)]
    pub priorities: Option<Vec<i32>>,
    /// Custom job labels. `None` = `P1..Pn`.
    #[serde(default)]
    pub job_labels: Option<Vec<String>>,
}

impl SolveRequest {
    /// Creates a request.
    pub fn new(algorithm: Algorithm, arrival_times: Vec<i64>, burst_times: Vec<i64>) -> Self {
        Self {
            algorithm,
            arrival_times,
            burst_times,
            time_quantum: None,
            priorities: None,
            job_labels: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Sets the priorities.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Sets custom job labels.
    pub fn with_job_labels(mut self, labels: Vec<String>) -> Self {
        self.job_labels = Some(labels);
        self
    }

    /// Builds the process set. Assumes a validated request.
    pub fn processes(&self) -> Vec<Process> {
        self.arrival_times
            .iter()
            .zip(&self.burst_times)
            .enumerate()
            .map(|(i, (&arrival, &burst))| {
                let job = self
                    .job_labels
                    .as_ref()
                    .and_then(|labels| labels.get(i).cloned())
                    .unwrap_or_else(|| Process::default_label(i));
                let priority = self
                    .priorities
                    .as_ref()
                    .and_then(|p| p.get(i).copied())
                    .unwrap_or(0);
                Process::new(job, i, arrival, burst).with_priority(priority)
            })
            .collect()
    }

    /// Validates the request and runs the selected discipline.
    ///
    /// # Errors
    /// [`SolveError::InvalidInput`] with every detected problem; no
    /// simulation work is done in that case.
    pub fn solve(&self) -> Result<Solution> {
        if let Err(errors) = validate_request(self) {
            warn!(
                algorithm = %self.algorithm,
                errors = errors.len(),
                "rejected scheduling request"
            );
            return Err(SolveError::InvalidInput(errors));
        }

        let processes = self.processes();
        let scheduler = self.algorithm.scheduler(self.time_quantum.unwrap_or(1));
        debug!(
            algorithm = scheduler.name(),
            discipline = self.algorithm.description(),
            preemptive = self.algorithm.is_preemptive(),
            processes = processes.len(),
            "solving"
        );

        Ok(scheduler.schedule(&processes))
    }
}
