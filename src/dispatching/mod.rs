//! Selection rules for choosing the next process to run.
//!
//! Every discipline that picks "the best ready process" does so through a
//! [`SelectionRule`] and the shared tie-break chain in [`select_best`]:
//! rule score, then earliest arrival, then input index.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best, Candidate};
//! use u_cpusched::models::Process;
//!
//! let a = Process::new("P1", 0, 0, 8);
//! let b = Process::new("P2", 1, 0, 3);
//! let ready = [Candidate::new(0, &a, 8), Candidate::new(1, &b, 3)];
//!
//! let best = select_best(&rules::ShortestRemaining, &ready);
//! assert_eq!(best.map(|c| c.process.job.as_str()), Some("P2"));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::{compare, select_best, Candidate};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A rule that scores ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties on the score are broken by
/// arrival time, then input index (see [`compare`]).
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a process given its remaining CPU time.
    fn evaluate(&self, process: &Process, remaining: i64) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
