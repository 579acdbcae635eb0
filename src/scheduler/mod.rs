//! Dispatcher and schedule summary.
//!
//! Provides the algorithm tag, the request that selects and runs a
//! discipline, and schedule quality metrics.
//!
//! # Dispatch
//!
//! `SolveRequest::solve` validates the input and maps the [`Algorithm`] tag
//! to its [`crate::algorithms::CpuScheduler`] through an exhaustive match,
//! so the set of disciplines is closed at compile time.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average turnaround, waiting and response time,
//! CPU utilization, throughput and context switches.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod algorithm;
mod kpi;
mod request;

pub use algorithm::Algorithm;
pub use kpi::ScheduleKpi;
pub use request::SolveRequest;
