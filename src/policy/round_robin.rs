//! Round-robin policy.
//!
//! # Algorithm
//!
//! Arrived processes wait in a FIFO queue. The head runs for at most one
//! quantum; if it still has service left it re-enqueues at the tail, but
//! only after processes that arrived during its slice, preserving FIFO
//! fairness. An empty queue with arrivals outstanding jumps the clock to
//! the next arrival.
//!
//! Completion rows use the original burst, not the remaining counter the
//! queue decrements.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::PolicyReport;
use crate::error::{Error, Result};
use crate::models::{Process, ScheduleRow, TimeSlice, Timeline};

/// Quantum used by the binary when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A process working its way through the round-robin queue.
#[derive(Debug, Clone)]
struct Job {
    process: Process,
    remaining: i64,
}

impl Job {
    fn new(process: Process) -> Self {
        let remaining = process.burst;
        Self { process, remaining }
    }
}

/// Preemptive round-robin scheduler with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler, rejecting a non-positive quantum.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(Error::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs the policy over a copy of the given process set.
    pub fn run(&self, processes: &[Process]) -> PolicyReport {
        let mut pending: Vec<Process> = processes.to_vec();
        pending.sort_by_key(|p| (p.arrival, p.id));

        let total = pending.len();
        let mut queue: VecDeque<Job> = VecDeque::new();
        let mut timeline = Timeline::new();
        let mut rows = Vec::with_capacity(total);
        let mut clock: i64 = 0;
        let mut next = 0;

        while rows.len() < total {
            while next < total && pending[next].arrival <= clock {
                queue.push_back(Job::new(pending[next].clone()));
                next += 1;
            }

            let Some(mut job) = queue.pop_front() else {
                clock = pending[next].arrival;
                continue;
            };

            let run = job.remaining.min(self.quantum);
            let start = clock;
            clock += run;
            job.remaining -= run;
            timeline.record(TimeSlice::new(job.process.id, start, clock));

            if job.remaining == 0 {
                rows.push(ScheduleRow::from_completion(&job.process, clock));
            } else {
                // Arrivals during this slice enter the queue ahead of the
                // preempted process.
                while next < total && pending[next].arrival <= clock {
                    queue.push_back(Job::new(pending[next].clone()));
                    next += 1;
                }
                queue.push_back(job);
            }
        }

        PolicyReport::new(rows, timeline)
    }
}
