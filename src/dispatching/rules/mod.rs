//! Built-in selection rules.
//!
//! - **Arrival**: FIRST_COME (FCFS ordering)
//! - **Time-based**: SRT (SJF and SRTF)
//! - **Priority**: PRIORITY (both priority disciplines)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// First come, first served.
///
/// Scores by arrival time; the tie-break chain then falls back to input index.
#[derive(Debug, Clone, Copy)]
pub struct FirstCome;

impl SelectionRule for FirstCome {
    fn name(&self) -> &'static str {
        "FIRST_COME"
    }

    fn evaluate(&self, process: &Process, _remaining: i64) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest remaining time.
///
/// For a process that has not run yet remaining equals burst, so the same
/// rule drives both SJF (evaluated once per dispatch) and SRTF (evaluated
/// at every event).
///
/// # Reference
/// Smith (1956), optimal for mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, _process: &Process, remaining: i64) -> RuleScore {
        remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Static priority. Lower value = higher priority.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _remaining: i64) -> RuleScore {
        i64::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value) First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_come_scores_arrival() {
        let p = Process::new("P1", 0, 7, 3);
        assert_eq!(FirstCome.evaluate(&p, 1), 7);
    }

    #[test]
    fn test_shortest_remaining_ignores_burst() {
        let p = Process::new("P1", 0, 0, 10);
        assert_eq!(ShortestRemaining.evaluate(&p, 4), 4);
    }

    #[test]
    fn test_priority_lower_is_better() {
        let urgent = Process::new("P1", 0, 0, 1).with_priority(-3);
        let lazy = Process::new("P2", 1, 0, 1).with_priority(5);
        assert!(HighestPriority.evaluate(&urgent, 1) < HighestPriority.evaluate(&lazy, 1));
    }

    #[test]
    fn test_names() {
        assert_eq!(FirstCome.name(), "FIRST_COME");
        assert_eq!(ShortestRemaining.name(), "SRT");
        assert_eq!(HighestPriority.name(), "PRIORITY");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time");
    }
}
