//! Gantt timeline builder shared by all disciplines.

use crate::models::{GanttSegment, Process, ProcessMetrics, Solution};

/// Accumulates segments in time order.
///
/// Adjacent spans of the same process are merged into one segment unless
/// coalescing is disabled (round robin keeps one segment per time slice).
/// Adjacent idle spans are always merged.
#[derive(Debug, Clone)]
pub(crate) struct Timeline {
    segments: Vec<GanttSegment>,
    coalesce: bool,
}

impl Timeline {
    /// Creates a coalescing timeline.
    pub(crate) fn new() -> Self {
        Self {
            segments: Vec::new(),
            coalesce: true,
        }
    }

    /// Creates a timeline that records every dispatch as its own segment.
    pub(crate) fn per_dispatch() -> Self {
        Self {
            segments: Vec::new(),
            coalesce: false,
        }
    }

    /// Records `process` holding the CPU over `[start, stop)`.
    pub(crate) fn run(&mut self, process: &Process, start: i64, stop: i64) {
        self.push(GanttSegment::running(process, start, stop));
    }

    /// Records an idle span over `[start, stop)`.
    pub(crate) fn idle(&mut self, start: i64, stop: i64) {
        self.push(GanttSegment::idle(start, stop));
    }

    fn push(&mut self, segment: GanttSegment) {
        if segment.stop <= segment.start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            let mergeable = last.stop == segment.start
                && last.process_index == segment.process_index
                && (self.coalesce || segment.is_idle());
            if mergeable {
                last.stop = segment.stop;
                return;
            }
        }
        self.segments.push(segment);
    }

    /// Builds the solution, deriving metrics in input order.
    ///
    /// `finish_times[i]` is the finish time of `processes[i]`.
    pub(crate) fn finish(self, processes: &[Process], finish_times: &[i64]) -> Solution {
        let metrics = processes
            .iter()
            .zip(finish_times)
            .map(|(p, &ft)| ProcessMetrics::from_finish(p, ft))
            .collect();
        Solution::new(self.segments, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_same_process() {
        let p = Process::new("P1", 0, 0, 4);
        let mut t = Timeline::new();
        t.run(&p, 0, 1);
        t.run(&p, 1, 4);
        let s = t.finish(&[p], &[4]);
        assert_eq!(s.segments.len(), 1);
        assert_eq!(s.segments[0].stop, 4);
    }

    #[test]
    fn test_per_dispatch_keeps_slices() {
        let p = Process::new("P1", 0, 0, 4);
        let mut t = Timeline::per_dispatch();
        t.run(&p, 0, 2);
        t.run(&p, 2, 4);
        t.idle(4, 5);
        t.idle(5, 6);
        let s = t.finish(&[p], &[4]);
        assert_eq!(s.segments.len(), 3);
        assert!(s.segments[2].is_idle());
        assert_eq!(s.segments[2].start, 4);
        assert_eq!(s.segments[2].stop, 6);
    }

    #[test]
    fn test_skips_empty_spans() {
        let p = Process::new("P1", 0, 0, 1);
        let mut t = Timeline::new();
        t.idle(0, 0);
        t.run(&p, 0, 1);
        let s = t.finish(&[p], &[1]);
        assert_eq!(s.segments.len(), 1);
        assert!(!s.segments[0].is_idle());
    }

    #[test]
    fn test_metrics_in_input_order() {
        let a = Process::new("A", 0, 0, 2);
        let b = Process::new("B", 1, 0, 1);
        let mut t = Timeline::new();
        t.run(&b, 0, 1);
        t.run(&a, 1, 3);
        let s = t.finish(&[a, b], &[3, 1]);
        assert_eq!(s.metrics[0].job, "A");
        assert_eq!(s.metrics[0].waiting_time, 1);
        assert_eq!(s.metrics[1].job, "B");
        assert_eq!(s.metrics[1].waiting_time, 0);
    }
}
