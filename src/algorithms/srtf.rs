//! Shortest remaining time first (preemptive SJF).
//!
//! # Algorithm
//! At every arrival and completion, the ready process with the least
//! remaining time takes the CPU. A newcomer preempts the running process
//! only if its remaining time is strictly smaller. Consecutive execution
//! of the same process forms one segment.

use super::simulation::run_preemptive;
use super::CpuScheduler;
use crate::dispatching::rules;
use crate::models::{Process, Solution};

/// Shortest remaining time first.
///
/// # Example
///
/// ```
/// use u_cpusched::algorithms::{CpuScheduler, Srtf};
/// use u_cpusched::models::Process;
///
/// let processes = vec![
///     Process::new("P1", 0, 0, 8),
///     Process::new("P2", 1, 1, 2),
/// ];
/// let solution = Srtf.schedule(&processes);
/// // P2 preempts P1 at t=1.
/// assert_eq!(solution.segments[0].stop, 1);
/// assert_eq!(solution.segments[1].job, "P2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl CpuScheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        run_preemptive(processes, &rules::ShortestRemaining)
    }
}
