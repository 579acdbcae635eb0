//! Rule-driven simulation loops.
//!
//! Two shapes cover four disciplines:
//!
//! - [`run_to_completion`]: pick the best ready process, run it to the end
//!   (SJF, priority non-preemptive).
//! - [`run_preemptive`]: re-select at every arrival and completion, switch
//!   only when a ready process scores strictly better than the running one
//!   (SRTF, priority preemptive).
//!
//! All working state (clock, remaining times, running slot) is local.

use tracing::trace;

use super::timeline::Timeline;
use crate::dispatching::{select_best, Candidate, SelectionRule};
use crate::models::{Process, Solution};

/// Arrived, unfinished processes at `clock`.
fn ready_set<'a>(processes: &'a [Process], remaining: &[i64], clock: i64) -> Vec<Candidate<'a>> {
    processes
        .iter()
        .enumerate()
        .filter(|(slot, p)| remaining[*slot] > 0 && p.has_arrived(clock))
        .map(|(slot, p)| Candidate::new(slot, p, remaining[slot]))
        .collect()
}

/// Earliest arrival strictly after `clock`.
fn next_arrival(processes: &[Process], clock: i64) -> Option<i64> {
    processes
        .iter()
        .map(|p| p.arrival_time)
        .filter(|&at| at > clock)
        .min()
}

/// Non-preemptive selection loop.
///
/// # Complexity
/// O(n^2): one ready-set scan per dispatch.
pub(crate) fn run_to_completion<R: SelectionRule + ?Sized>(
    processes: &[Process],
    rule: &R,
) -> Solution {
    let mut timeline = Timeline::new();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut finish_times = vec![0; processes.len()];
    let mut unfinished = processes.len();
    let mut clock = 0;

    while unfinished > 0 {
        let ready = ready_set(processes, &remaining, clock);
        let Some(best) = select_best(rule, &ready) else {
            // Nothing ready: every unfinished process arrives later.
            match next_arrival(processes, clock) {
                Some(at) => {
                    timeline.idle(clock, at);
                    clock = at;
                    continue;
                }
                None => break,
            }
        };

        let stop = clock + best.remaining;
        timeline.run(best.process, clock, stop);
        remaining[best.slot] = 0;
        finish_times[best.slot] = stop;
        unfinished -= 1;
        clock = stop;
    }

    timeline.finish(processes, &finish_times)
}

/// Preemptive selection loop, advancing from event to event.
///
/// Events are arrivals and completions. Between two events the ready set
/// cannot change, so the chosen process runs uninterrupted until the next
/// one. A running process keeps the CPU unless the best ready process has
/// a strictly lower rule score; ties never preempt.
pub(crate) fn run_preemptive<R: SelectionRule + ?Sized>(
    processes: &[Process],
    rule: &R,
) -> Solution {
    let mut timeline = Timeline::new();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut finish_times = vec![0; processes.len()];
    let mut unfinished = processes.len();
    let mut running: Option<usize> = None;
    let mut clock = 0;

    while unfinished > 0 {
        let ready = ready_set(processes, &remaining, clock);
        let Some(best) = select_best(rule, &ready) else {
            match next_arrival(processes, clock) {
                Some(at) => {
                    timeline.idle(clock, at);
                    clock = at;
                    continue;
                }
                None => break,
            }
        };

        let current = match running.and_then(|slot| ready.iter().find(|c| c.slot == slot)) {
            Some(incumbent)
                if rule.evaluate(best.process, best.remaining)
                    >= rule.evaluate(incumbent.process, incumbent.remaining) =>
            {
                *incumbent
            }
            Some(incumbent) => {
                trace!(
                    rule = rule.name(),
                    time = clock,
                    preempted = %incumbent.process.job,
                    by = %best.process.job,
                    "preemption"
                );
                best
            }
            None => best,
        };

        let mut stop = clock + current.remaining;
        if let Some(at) = next_arrival(processes, clock) {
            stop = stop.min(at);
        }

        timeline.run(current.process, clock, stop);
        remaining[current.slot] -= stop - clock;
        clock = stop;

        if remaining[current.slot] == 0 {
            finish_times[current.slot] = clock;
            unfinished -= 1;
            running = None;
        } else {
            running = Some(current.slot);
        }
    }

    timeline.finish(processes, &finish_times)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn procs(arrivals: &[i64], bursts: &[i64]) -> Vec<Process> {
        arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&at, &bt))| Process::new(Process::default_label(i), i, at, bt))
            .collect()
    }

    #[test]
    fn test_next_arrival() {
        let ps = procs(&[0, 3, 5], &[1, 1, 1]);
        assert_eq!(next_arrival(&ps, 0), Some(3));
        assert_eq!(next_arrival(&ps, 3), Some(5));
        assert_eq!(next_arrival(&ps, 5), None);
    }

    #[test]
    fn test_ready_set_skips_finished_and_future() {
        let ps = procs(&[0, 0, 4], &[2, 2, 2]);
        let ready = ready_set(&ps, &[0, 2, 2], 1);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].slot, 1);
    }

    #[test]
    fn test_run_to_completion_idles_before_first_arrival() {
        let ps = procs(&[3], &[2]);
        let s = run_to_completion(&ps, &rules::ShortestRemaining);
        assert_eq!(s.segments.len(), 2);
        assert!(s.segments[0].is_idle());
        assert_eq!((s.segments[0].start, s.segments[0].stop), (0, 3));
        assert_eq!(s.metrics[0].finish_time, 5);
    }

    #[test]
    fn test_preemptive_continues_across_arrival() {
        // P2 arrives at 2 but is longer; P1 keeps running in one segment.
        let ps = procs(&[0, 2], &[4, 6]);
        let s = run_preemptive(&ps, &rules::ShortestRemaining);
        assert_eq!(s.segments.len(), 2);
        assert_eq!((s.segments[0].start, s.segments[0].stop), (0, 4));
        assert_eq!((s.segments[1].start, s.segments[1].stop), (4, 10));
    }

    #[test]
    fn test_preemptive_tie_keeps_incumbent() {
        // At t=1 P1 has 3 left and P2 needs 3: no switch.
        let ps = procs(&[0, 1], &[4, 3]);
        let s = run_preemptive(&ps, &rules::ShortestRemaining);
        assert_eq!(s.segments[0].job, "P1");
        assert_eq!(s.segments[0].stop, 4);
        assert_eq!(s.metrics[1].finish_time, 7);
    }

    #[test]
    fn test_empty_input() {
        let s = run_preemptive(&[], &rules::ShortestRemaining);
        assert!(s.segments.is_empty());
        assert!(s.metrics.is_empty());
        let s = run_to_completion(&[], &rules::HighestPriority);
        assert!(s.segments.is_empty());
    }
}
