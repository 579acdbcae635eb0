//! Deterministic tie-break chain shared by all selection-based disciplines.
//!
//! Order: rule score, then arrival time, then input index. The chain is
//! total, so selection never depends on iteration order.

use std::cmp::Ordering;

use super::SelectionRule;
use crate::models::Process;

/// A ready process together with its remaining CPU time.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position of the process in the slice being scheduled.
    pub slot: usize,
    /// The process.
    pub process: &'a Process,
    /// CPU time still required.
    pub remaining: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate.
    pub fn new(slot: usize, process: &'a Process, remaining: i64) -> Self {
        Self {
            slot,
            process,
            remaining,
        }
    }
}

/// Compares two candidates under `rule` (Less = `a` runs first).
pub fn compare<R: SelectionRule + ?Sized>(
    rule: &R,
    a: &Candidate<'_>,
    b: &Candidate<'_>,
) -> Ordering {
    rule.evaluate(a.process, a.remaining)
        .cmp(&rule.evaluate(b.process, b.remaining))
        .then_with(|| a.process.arrival_time.cmp(&b.process.arrival_time))
        .then_with(|| a.process.index.cmp(&b.process.index))
}

/// Returns the highest-priority candidate, or `None` if `candidates` is empty.
pub fn select_best<'a, R: SelectionRule + ?Sized>(
    rule: &R,
    candidates: &[Candidate<'a>],
) -> Option<Candidate<'a>> {
    candidates
        .iter()
        .min_by(|a, b| compare(rule, a, b))
        .copied()
}
