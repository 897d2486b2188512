//! Generic non-preemptive smallest-key engine.
//!
//! SJF and priority scheduling are the same algorithm with different
//! comparators, so there is exactly one control loop, parameterized by a
//! [`SelectionRule`]. At each decision point the arrived, not-yet-run
//! process with the smallest selection key runs to completion; when nothing
//! is ready the clock jumps to the next arrival without emitting a slice.
//!
//! # Complexity
//! O(n log n): every process is pushed and popped once on a binary heap.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.3

use std::sync::Arc;

use super::queue::ReadyQueue;
use super::{rules, PolicyReport, SelectionRule};
use crate::models::{Process, ScheduleRow, TimeSlice, Timeline};

/// Non-preemptive scheduler driven by a selection rule.
///
/// # Example
///
/// ```
/// use sched_sim::models::Process;
/// use sched_sim::policy::NonPreemptiveScheduler;
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 1),
/// ];
/// let report = NonPreemptiveScheduler::shortest_job_first().run(&processes);
/// // P1 is alone at t=0; at t=5 the shorter P3 beats P2.
/// let order: Vec<_> = report.rows.iter().map(|r| r.process).collect();
/// assert_eq!(order, vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    rule: Arc<dyn SelectionRule>,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler with the given selection rule.
    pub fn new<R: SelectionRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Shortest-job-first: smallest original burst wins.
    pub fn shortest_job_first() -> Self {
        Self::new(rules::ShortestBurst)
    }

    /// Priority scheduling: lowest priority value wins, burst tie-break.
    pub fn by_priority() -> Self {
        Self::new(rules::Priority)
    }

    /// Name of the underlying rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Runs the policy over a copy of the given process set.
    pub fn run(&self, processes: &[Process]) -> PolicyReport {
        let mut pending: Vec<Process> = processes.to_vec();
        pending.sort_by_key(|p| (p.arrival, p.id));

        let total = pending.len();
        let mut queue = ReadyQueue::new();
        let mut timeline = Timeline::new();
        let mut rows = Vec::with_capacity(total);
        let mut clock: i64 = 0;
        let mut next = 0;

        while rows.len() < total {
            while next < total && pending[next].arrival <= clock {
                let p = pending[next].clone();
                queue.push(self.rule.key(&p), p);
                next += 1;
            }

            let Some(p) = queue.pop() else {
                // Idle: jump to the next arrival, no slice for the gap.
                clock = pending[next].arrival;
                continue;
            };

            let start = clock;
            clock += p.burst;
            timeline.record(TimeSlice::new(p.id, start, clock));
            rows.push(ScheduleRow::from_completion(&p, clock));
        }

        PolicyReport::new(rows, timeline)
    }
}
