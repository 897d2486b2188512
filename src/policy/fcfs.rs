//! First-come-first-served policy.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (stable, so equal arrivals keep input
//!    order).
//! 2. Run each to completion: it starts at `max(clock, arrival)` and the
//!    clock advances by its burst.
//!
//! The baseline discipline: optimal for nothing, trivial to verify.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use super::PolicyReport;
use crate::models::{Process, ScheduleRow, TimeSlice, Timeline};

/// First-come-first-served scheduler. No preemption, no configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the policy over a copy of the given process set.
    pub fn run(&self, processes: &[Process]) -> PolicyReport {
        let mut order: Vec<Process> = processes.to_vec();
        order.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut rows = Vec::with_capacity(order.len());
        let mut clock: i64 = 0;

        for p in &order {
            let start = clock.max(p.arrival);
            clock = start + p.burst;
            timeline.record(TimeSlice::new(p.id, start, clock));
            rows.push(ScheduleRow::from_completion(p, clock));
        }

        PolicyReport::new(rows, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    #[test]
    fn test_fcfs_services_in_arrival_order() {
        let report = FcfsScheduler::new().run(&make_processes());

        assert_eq!(report.rows[0].process, 1);
        assert_eq!(report.rows[1].process, 2);
        assert_eq!(report.rows[2].process, 3);

        // P1 starts at 0 (wait 0), P2 at 5 (wait 4), P3 at 8 (wait 6).
        assert_eq!(report.rows[0].waiting, 0);
        assert_eq!(report.rows[1].waiting, 4);
        assert_eq!(report.rows[2].waiting, 6);

        let avg = report.metrics.average_waiting;
        assert!((avg - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_timeline_is_contiguous() {
        let report = FcfsScheduler::new().run(&make_processes());
        let slices = &report.timeline.slices;

        assert_eq!(slices.len(), 3);
        assert_eq!((slices[0].start, slices[0].stop), (0, 5));
        assert_eq!((slices[1].start, slices[1].stop), (5, 8));
        assert_eq!((slices[2].start, slices[2].stop), (8, 9));
    }

    #[test]
    fn test_fcfs_single_process_waits_zero() {
        let report = FcfsScheduler::new().run(&[Process::new(7, 3, 4)]);
        assert_eq!(report.rows[0].waiting, 0);
        assert_eq!(report.rows[0].completion, 7);
        assert_eq!(report.timeline.slices[0].start, 3);
    }

    #[test]
    fn test_fcfs_idle_gap_emits_no_slice() {
        let report = FcfsScheduler::new().run(&[
            Process::new(1, 0, 2),
            Process::new(2, 10, 3),
        ]);

        assert_eq!(report.timeline.slices[1].start, 10);
        assert_eq!(report.timeline.busy_time(), 5);
        assert_eq!(report.timeline.span(), 13);
        assert_eq!(report.rows[1].waiting, 0);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let report = FcfsScheduler::new().run(&[
            Process::new(9, 0, 1),
            Process::new(4, 0, 1),
            Process::new(6, 0, 1),
        ]);
        let order: Vec<_> = report.rows.iter().map(|r| r.process).collect();
        assert_eq!(order, vec![9, 4, 6]);
    }

    #[test]
    fn test_fcfs_empty_set() {
        let report = FcfsScheduler::new().run(&[]);
        assert!(report.rows.is_empty());
        assert!(report.timeline.is_empty());
        assert_eq!(report.metrics.throughput, 0.0);
    }

    #[test]
    fn test_fcfs_does_not_mutate_input() {
        let input = make_processes();
        let before = input.clone();
        let _ = FcfsScheduler::new().run(&input);
        assert_eq!(input, before);
    }
}
