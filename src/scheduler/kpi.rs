//! Schedule quality metrics (KPIs).
//!
//! Summarizes a [`Solution`] with the averages a results table shows plus
//! CPU-level indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | End of the last segment |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Changes between distinct processes |
//!
//! Averages are unrounded; rounding is a presentation concern.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Solution;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes.
    pub process_count: usize,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response_time: f64,
    /// End of the last segment.
    pub makespan: i64,
    /// Time the CPU ran a process.
    pub busy_time: i64,
    /// Time the CPU was idle within the makespan.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between distinct processes (idle spans ignored).
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a solution.
    pub fn calculate(solution: &Solution) -> Self {
        let process_count = solution.metrics.len();
        let total_turnaround_time: i64 =
            solution.metrics.iter().map(|m| m.turnaround_time).sum();
        let total_waiting_time: i64 = solution.metrics.iter().map(|m| m.waiting_time).sum();
        let total_response_time: i64 = solution
            .metrics
            .iter()
            .filter_map(|m| solution.first_start(&m.job).map(|s| s - m.arrival_time))
            .sum();

        let makespan = solution.makespan();
        let busy_time = solution.busy_time();

        let mut context_switches = 0;
        let mut previous: Option<usize> = None;
        for segment in solution.segments.iter().filter(|s| !s.is_idle()) {
            if previous.is_some() && previous != segment.process_index {
                context_switches += 1;
            }
            previous = segment.process_index;
        }

        Self {
            process_count,
            total_turnaround_time,
            avg_turnaround_time: mean(total_turnaround_time, process_count),
            total_waiting_time,
            avg_waiting_time: mean(total_waiting_time, process_count),
            avg_response_time: mean(total_response_time, process_count),
            makespan,
            busy_time,
            idle_time: solution.idle_time(),
            cpu_utilization: ratio(busy_time as f64, makespan),
            throughput: ratio(process_count as f64, makespan),
            context_switches,
        }
    }
}

fn mean(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn ratio(value: f64, makespan: i64) -> f64 {
    if makespan <= 0 {
        0.0
    } else {
        value / makespan as f64
    }
}
