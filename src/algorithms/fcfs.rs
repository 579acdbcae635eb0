//! First-come, first-served.
//!
//! # Algorithm
//! 1. Order processes by arrival (ties: input index).
//! 2. Run each to completion in that order.
//! 3. Idle whenever the next arrival lies beyond the clock.
//!
//! # Complexity
//! O(n log n) for the sort.

use super::timeline::Timeline;
use super::CpuScheduler;
use crate::dispatching::{compare, rules, Candidate};
use crate::models::{Process, Solution};

/// First-come, first-served (non-preemptive).
///
/// # Example
///
/// ```
/// use u_cpusched::algorithms::{CpuScheduler, Fcfs};
/// use u_cpusched::models::Process;
///
/// let processes = vec![
///     Process::new("P1", 0, 0, 5),
///     Process::new("P2", 1, 2, 3),
/// ];
/// let solution = Fcfs.schedule(&processes);
/// assert_eq!(solution.metrics[1].waiting_time, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Solution {
        let mut order: Vec<Candidate<'_>> = processes
            .iter()
            .enumerate()
            .map(|(slot, p)| Candidate::new(slot, p, p.burst_time))
            .collect();
        order.sort_by(|a, b| compare(&rules::FirstCome, a, b));

        let mut timeline = Timeline::new();
        let mut finish_times = vec![0; processes.len()];
        let mut clock = 0;

        for candidate in &order {
            let start = clock.max(candidate.process.arrival_time);
            timeline.idle(clock, start);
            clock = start + candidate.remaining;
            timeline.run(candidate.process, start, clock);
            finish_times[candidate.slot] = clock;
        }

        timeline.finish(processes, &finish_times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs(arrivals: &[i64], bursts: &[i64]) -> Vec<Process> {
        arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&at, &bt))| Process::new(Process::default_label(i), i, at, bt))
            .collect()
    }

    fn spans(s: &Solution) -> Vec<(&str, i64, i64)> {
        s.segments
            .iter()
            .map(|g| (g.job.as_str(), g.start, g.stop))
            .collect()
    }

    #[test]
    fn test_fcfs_basic() {
        let s = Fcfs.schedule(&procs(&[0, 2, 4], &[5, 3, 2]));
        assert_eq!(spans(&s), vec![("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 10)]);

        let expected = [(5, 5, 0), (8, 6, 3), (10, 6, 4)];
        for (m, (ft, tat, wat)) in s.metrics.iter().zip(expected) {
            assert_eq!((m.finish_time, m.turnaround_time, m.waiting_time), (ft, tat, wat));
        }
    }

    #[test]
    fn test_fcfs_unsorted_input() {
        // Input order differs from arrival order; metrics stay in input order.
        let s = Fcfs.schedule(&procs(&[4, 0, 1], &[1, 2, 2]));
        assert_eq!(spans(&s), vec![("P2", 0, 2), ("P3", 2, 4), ("P1", 4, 5)]);
        assert_eq!(s.metrics[0].job, "P1");
        assert_eq!(s.metrics[0].finish_time, 5);
    }

    #[test]
    fn test_fcfs_ties_by_index() {
        let s = Fcfs.schedule(&procs(&[1, 1, 0], &[3, 1, 2]));
        assert_eq!(spans(&s), vec![("P3", 0, 2), ("P1", 2, 5), ("P2", 5, 6)]);
    }

    #[test]
    fn test_fcfs_idle_gaps() {
        let s = Fcfs.schedule(&procs(&[2, 10], &[3, 1]));
        assert_eq!(
            spans(&s),
            vec![("Idle", 0, 2), ("P1", 2, 5), ("Idle", 5, 10), ("P2", 10, 11)]
        );
        assert_eq!(s.idle_time(), 7);
    }

    #[test]
    fn test_fcfs_adjacent_processes_not_merged() {
        let s = Fcfs.schedule(&procs(&[0, 0], &[1, 1]));
        assert_eq!(s.segments.len(), 2);
    }
}
