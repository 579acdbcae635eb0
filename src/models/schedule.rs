//! Schedule (solution) model.
//!
//! A solution is the Gantt timeline produced by one scheduling run plus
//! the per-process metrics derived from it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::process::{Process, IDLE_LABEL};

/// A maximal contiguous span during which one process (or idle) holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process label, or [`IDLE_LABEL`] for idle spans.
    pub job: String,
    /// Input index of the running process. `None` = idle.
    pub process_index: Option<usize>,
    /// Start time (inclusive).
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

impl GanttSegment {
    /// Creates a segment in which `process` runs.
    pub fn running(process: &Process, start: i64, stop: i64) -> Self {
        Self {
            job: process.job.clone(),
            process_index: Some(process.index),
            start,
            stop,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, stop: i64) -> Self {
        Self {
            job: IDLE_LABEL.to_string(),
            process_index: None,
            start,
            stop,
        }
    }

    /// Whether no process runs in this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_index.is_none()
    }

    /// Segment length (stop - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Completion record for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process label.
    pub job: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Time at which the last unit of work completed.
    pub finish_time: i64,
    /// finish - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Derives turnaround and waiting time from a finish time.
    pub fn from_finish(process: &Process, finish_time: i64) -> Self {
        let turnaround_time = finish_time - process.arrival_time;
        Self {
            job: process.job.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}

/// Result of one scheduling run.
///
/// `segments` are in time order; `metrics` are in original input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Gantt timeline.
    pub segments: Vec<GanttSegment>,
    /// Per-process metrics, one per input process.
    pub metrics: Vec<ProcessMetrics>,
}

impl Solution {
    /// Creates a solution.
    pub fn new(segments: Vec<GanttSegment>, metrics: Vec<ProcessMetrics>) -> Self {
        Self { segments, metrics }
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }

    /// Makespan: end of the last segment (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.stop).unwrap_or(0)
    }

    /// Total time any process held the CPU.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(GanttSegment::duration)
            .sum()
    }

    /// Total idle time within `[0, makespan)`.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(GanttSegment::duration)
            .sum()
    }

    /// Returns all segments of a given job, in time order.
    pub fn segments_for_job(&self, job: &str) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| !s.is_idle() && s.job == job)
            .collect()
    }

    /// Finds the metrics record of a given job.
    pub fn metrics_for_job(&self, job: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.job == job)
    }

    /// Time at which a job was first dispatched.
    pub fn first_start(&self, job: &str) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| !s.is_idle() && s.job == job)
            .map(|s| s.start)
    }

    /// Whether the segments tile `[0, makespan)` without gaps or overlaps.
    pub fn is_well_formed(&self) -> bool {
        let mut cursor = 0;
        for segment in &self.segments {
            if segment.start != cursor || segment.stop <= segment.start {
                return false;
            }
            cursor = segment.stop;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        let p1 = Process::new("P1", 0, 0, 3);
        let p2 = Process::new("P2", 1, 5, 2);
        Solution::new(
            vec![
                GanttSegment::running(&p1, 0, 3),
                GanttSegment::idle(3, 5),
                GanttSegment::running(&p2, 5, 7),
            ],
            vec![
                ProcessMetrics::from_finish(&p1, 3),
                ProcessMetrics::from_finish(&p2, 7),
            ],
        )
    }

    #[test]
    fn test_metrics_from_finish() {
        let p = Process::new("P2", 1, 2, 3);
        let m = ProcessMetrics::from_finish(&p, 8);
        assert_eq!(m.finish_time, 8);
        assert_eq!(m.turnaround_time, 6);
        assert_eq!(m.waiting_time, 3);
    }

    #[test]
    fn test_segment_constructors() {
        let p = Process::new("P4", 3, 0, 1);
        let run = GanttSegment::running(&p, 2, 6);
        assert_eq!(run.job, "P4");
        assert_eq!(run.process_index, Some(3));
        assert_eq!(run.duration(), 4);
        assert!(!run.is_idle());

        let idle = GanttSegment::idle(0, 2);
        assert_eq!(idle.job, IDLE_LABEL);
        assert!(idle.is_idle());
    }

    #[test]
    fn test_solution_times() {
        let s = sample();
        assert_eq!(s.makespan(), 7);
        assert_eq!(s.busy_time(), 5);
        assert_eq!(s.idle_time(), 2);
        assert_eq!(s.process_count(), 2);
    }

    #[test]
    fn test_solution_queries() {
        let s = sample();
        assert_eq!(s.segments_for_job("P2").len(), 1);
        assert!(s.segments_for_job(IDLE_LABEL).is_empty());
        assert_eq!(s.metrics_for_job("P1").map(|m| m.finish_time), Some(3));
        assert_eq!(s.first_start("P2"), Some(5));
        assert_eq!(s.first_start("P9"), None);
    }

    #[test]
    fn test_well_formed() {
        assert!(sample().is_well_formed());
        assert!(Solution::default().is_well_formed());

        let p = Process::new("P1", 0, 0, 2);
        let gap = Solution::new(
            vec![GanttSegment::running(&p, 0, 1), GanttSegment::running(&p, 2, 3)],
            vec![],
        );
        assert!(!gap.is_well_formed());

        let late_start = Solution::new(vec![GanttSegment::running(&p, 1, 3)], vec![]);
        assert!(!late_start.is_well_formed());
    }

    #[test]
    fn test_empty_solution() {
        let s = Solution::default();
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.busy_time(), 0);
        assert_eq!(s.idle_time(), 0);
    }
}
