//! Round robin with a fixed time quantum.
//!
//! # Algorithm
//! 1. Seed a FIFO ready queue in arrival order (ties: input index).
//! 2. Dequeue the head and run it for `min(quantum, remaining)`.
//! 3. Enqueue every process that arrived up to the end of that slice.
//! 4. Re-enqueue the slice owner at the tail if it still has work.
//! 5. With an empty queue, idle until the next arrival.
//!
//! Arrivals are enqueued before the preempted process, so a process arriving
//! exactly at a quantum boundary runs ahead of the one just preempted.
//! Each slice is its own segment, so no segment exceeds the quantum.

use std::collections::VecDeque;

use super::timeline::Timeline;
use super::CpuScheduler;
use crate::dispatching::{compare, rules, Candidate};
use crate::models::{Process, Solution};

/// Round robin scheduling.
///
/// # Example
///
/// ```
/// use u_cpusched::algorithms::{CpuScheduler, RoundRobin};
/// use u_cpusched::models::Process;
///
/// let processes = vec![
///     Process::new("P1", 0, 0, 4),
///     Process::new("P2", 1, 1, 3),
///     Process::new("P3", 2, 2, 2),
/// ];
/// let solution = RoundRobin::new(2).schedule(&processes);
/// let jobs: Vec<&str> = solution.segments.iter().map(|s| s.job.as_str()).collect();
/// assert_eq!(jobs, ["P1", "P2", "P3", "P1", "P2"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a round robin scheduler.
    ///
    /// Quanta below 1 are raised to 1; validated requests never reach that.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        let mut arrivals: Vec<Candidate<'_>> = processes
            .iter()
            .enumerate()
            .map(|(slot, p)| Candidate::new(slot, p, p.burst_time))
            .collect();
        arrivals.sort_by(|a, b| compare(&rules::FirstCome, a, b));

        let mut timeline = Timeline::per_dispatch();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut finish_times = vec![0; processes.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut next = 0;
        let mut clock = 0;

        loop {
            while let Some(c) = arrivals.get(next).filter(|c| c.process.has_arrived(clock)) {
                queue.push_back(c.slot);
                next += 1;
            }

            let Some(slot) = queue.pop_front() else {
                match arrivals.get(next) {
                    Some(c) => {
                        let at = c.process.arrival_time;
                        timeline.idle(clock, at);
                        clock = at;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = self.quantum.min(remaining[slot]);
            timeline.run(&processes[slot], clock, clock + slice);
            clock += slice;
            remaining[slot] -= slice;

            while let Some(c) = arrivals.get(next).filter(|c| c.process.has_arrived(clock)) {
                queue.push_back(c.slot);
                next += 1;
            }

            if remaining[slot] > 0 {
                queue.push_back(slot);
            } else {
                finish_times[slot] = clock;
            }
        }

        timeline.finish(processes, &finish_times)
    }
}
