//! CPU scheduling disciplines.
//!
//! Six implementations of one capability: given validated processes,
//! produce a Gantt timeline and per-process metrics.
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst |
//! | [`Srtf`] | at events | shortest remaining time |
//! | [`RoundRobin`] | per quantum | FIFO queue |
//! | [`PriorityNonPreemptive`] | no | lowest priority value |
//! | [`PriorityPreemptive`] | at events | lowest priority value |
//!
//! Schedulers assume validated input (see [`crate::validation`]): positive
//! bursts, non-negative arrivals and, for round robin, a positive quantum.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod priority;
mod round_robin;
mod simulation;
mod sjf;
mod srtf;
mod timeline;

pub use fcfs::Fcfs;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::{Process, Solution};
use std::fmt::Debug;

/// A CPU scheduling discipline.
///
/// Implementations are stateless between calls; all simulation state is
/// local to [`CpuScheduler::schedule`].
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short tag (e.g. "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Schedules `processes` on a single CPU.
    ///
    /// Segments tile `[0, makespan)`; metrics follow the order of `processes`.
    fn schedule(&self, processes: &[Process]) -> Solution;
}
