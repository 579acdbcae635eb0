//! Shortest job first (non-preemptive).
//!
//! At each decision point, runs the arrived process with the smallest burst
//! to completion. Ties: earliest arrival, then input index.

use super::simulation::run_to_completion;
use super::CpuScheduler;
use crate::dispatching::rules;
use crate::models::{Process, Solution};

/// Shortest job first (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        run_to_completion(processes, &rules::ShortestRemaining)
    }
}
