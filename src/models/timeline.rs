//! Execution timeline (Gantt trace) model.
//!
//! A timeline is the ordered, append-only record of which process held the
//! CPU over which interval. Policies record one slice per contiguous stretch
//! of service; idle time emits no slice, so gaps between slices are exactly
//! the intervals where no process was ready.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A contiguous interval of CPU service attributed to one process.
///
/// Half-open: the process runs in `[start, stop)`, with `stop >= start >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Serviced process.
    pub process: ProcessId,
    /// Interval start.
    pub start: i64,
    /// Interval end.
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(process: ProcessId, start: i64, stop: i64) -> Self {
        Self {
            process,
            start,
            stop,
        }
    }

    /// Slice length (stop - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// The Gantt trace of one policy run.
///
/// Slices are appended as the simulated clock advances, so the sequence is
/// non-decreasing in `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution intervals in emission order.
    pub slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn record(&mut self, slice: TimeSlice) {
        self.slices.push(slice);
    }

    /// Total elapsed simulated time: the latest stop across all slices.
    pub fn span(&self) -> i64 {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Total CPU-busy time: sum of all slice durations.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Total service received by one process across all its slices.
    pub fn service_time(&self, process: ProcessId) -> i64 {
        self.slices_for(process).iter().map(|s| s.duration()).sum()
    }

    /// All slices attributed to one process, in emission order.
    pub fn slices_for(&self, process: ProcessId) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record(TimeSlice::new(1, 0, 2));
        t.record(TimeSlice::new(2, 2, 4));
        t.record(TimeSlice::new(1, 4, 6));
        t
    }

    #[test]
    fn test_slice_duration() {
        let s = TimeSlice::new(1, 3, 8);
        assert_eq!(s.duration(), 5);
    }

    #[test]
    fn test_timeline_span() {
        assert_eq!(sample_timeline().span(), 6);
    }

    #[test]
    fn test_timeline_busy_time() {
        assert_eq!(sample_timeline().busy_time(), 6);
    }

    #[test]
    fn test_service_time_per_process() {
        let t = sample_timeline();
        assert_eq!(t.service_time(1), 4); // [0,2) and [4,6)
        assert_eq!(t.service_time(2), 2);
        assert_eq!(t.service_time(99), 0);
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.slices_for(2).len(), 1);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.span(), 0);
        assert_eq!(t.busy_time(), 0);
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_span_with_idle_gap() {
        // Idle from 2 to 5 emits no slice; span still reaches the last stop.
        let mut t = Timeline::new();
        t.record(TimeSlice::new(1, 0, 2));
        t.record(TimeSlice::new(2, 5, 7));
        assert_eq!(t.span(), 7);
        assert_eq!(t.busy_time(), 4);
    }
}
