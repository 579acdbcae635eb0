//! CPU scheduling engine.
//!
//! Computes single-CPU execution schedules for a fixed process set under
//! six classic disciplines and reports per-process completion metrics.
//! Pure and synchronous: no I/O, no shared state, safe to call from many
//! threads at once.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `GanttSegment`, `ProcessMetrics`, `Solution`
//! - **`dispatching`**: Selection rules and the shared tie-break chain
//! - **`algorithms`**: FCFS, SJF, SRTF, round robin, priority (both variants)
//! - **`scheduler`**: Algorithm tag, request/dispatcher, KPI summary
//! - **`validation`**: Input checks run before any simulation
//!
//! # Example
//!
//! ```
//! use u_cpusched::{solve, Algorithm};
//!
//! let solution = solve(Algorithm::Fcfs, &[0, 2, 4], &[5, 3, 2], None, None).unwrap();
//! let waits: Vec<i64> = solution.metrics.iter().map(|m| m.waiting_time).collect();
//! assert_eq!(waits, vec![0, 3, 4]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ParseAlgorithmError, Result, SolveError};
pub use models::{GanttSegment, ProcessMetrics, Solution};
pub use scheduler::{Algorithm, ScheduleKpi, SolveRequest};

/// Validates the inputs and runs one discipline.
///
/// `time_quantum` is required for round robin, `priorities` for the two
/// priority disciplines; both are ignored otherwise.
///
/// # Errors
/// [`SolveError::InvalidInput`] when the inputs fail validation.
pub fn solve(
    algorithm: Algorithm,
    arrival_times: &[i64],
    burst_times: &[i64],
    time_quantum: Option<i64>,
    priorities: Option<&[i32]>,
) -> Result<Solution> {
    let request = SolveRequest {
        algorithm,
        arrival_times: arrival_times.to_vec(),
        burst_times: burst_times.to_vec(),
        time_quantum,
        priorities: priorities.map(<[i32]>::to_vec),
        job_labels: None,
    };
    request.solve()
}
