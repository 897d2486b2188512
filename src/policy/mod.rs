//! Scheduling policies.
//!
//! Four interchangeable disciplines, each a pure function of a process set:
//!
//! - [`FcfsScheduler`]: first-come-first-served, non-preemptive.
//! - [`NonPreemptiveScheduler`] with [`rules::ShortestBurst`]: SJF.
//! - [`NonPreemptiveScheduler`] with [`rules::Priority`]: priority scheduling.
//! - [`RoundRobinScheduler`]: preemptive, fixed time quantum.
//!
//! SJF and priority scheduling share one control loop and differ only in the
//! [`SelectionRule`] that orders the ready queue. Every policy works on an
//! internal copy of the caller's processes and returns a self-contained
//! [`PolicyReport`]; the same input always produces the same report.
//!
//! # Usage
//!
//! ```
//! use sched_sim::models::Process;
//! use sched_sim::policy::NonPreemptiveScheduler;
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let report = NonPreemptiveScheduler::shortest_job_first().run(&processes);
//! assert_eq!(report.rows.len(), 2);
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod metrics;
mod nonpreemptive;
mod queue;
mod round_robin;
pub mod rules;

pub use fcfs::FcfsScheduler;
pub use metrics::RunMetrics;
pub use nonpreemptive::NonPreemptiveScheduler;
pub use queue::ReadyQueue;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ScheduleRow, Timeline};

/// Ordering key produced by a [`SelectionRule`].
///
/// Components compare lexicographically and **lower keys are selected
/// first**. Rules put their primary criterion in the first slot and
/// tie-breaks after it; unused trailing slots stay zero. The process id is
/// always part of the key, so the order is total and runs are deterministic.
pub type SelectionKey = (i64, i64, i64, i64);

/// A rule that orders ready processes for non-preemptive selection.
///
/// # Key Convention
/// **Lower key = selected first.** Rules map a process to a [`SelectionKey`]
/// once, at enqueue time; keys must not depend on the clock.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Maps a process to its selection key.
    fn key(&self, process: &Process) -> SelectionKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The self-contained result of one policy run.
///
/// Nothing in a report is mutated after the policy returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// One row per completed process, in completion order.
    pub rows: Vec<ScheduleRow>,
    /// The Gantt trace of the run.
    pub timeline: Timeline,
    /// Aggregates derived from the rows.
    pub metrics: RunMetrics,
}

impl PolicyReport {
    /// Assembles a report, deriving the aggregate metrics from the rows.
    pub fn new(rows: Vec<ScheduleRow>, timeline: Timeline) -> Self {
        let metrics = RunMetrics::calculate(&rows);
        Self {
            rows,
            timeline,
            metrics,
        }
    }
}

/// Policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served, non-preemptive.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Priority, non-preemptive, burst as first tie-break.
    Priority,
    /// Round-robin, preemptive, fixed quantum.
    RoundRobin,
}

impl Policy {
    /// Parses from a string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Some(Self::Fcfs),
            "sjf" | "shortest_job_first" => Some(Self::Sjf),
            "priority" | "prio" => Some(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Some(Self::RoundRobin),
            _ => None,
        }
    }

    /// Short identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable title used in rendered reports.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-come, first-serve",
            Self::Sjf => "Shortest-job-first",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round-robin",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
