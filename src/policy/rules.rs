//! Built-in selection rules.
//!
//! # Key Convention
//! Lower keys are selected first; see [`SelectionRule`](super::SelectionRule).

use super::{SelectionKey, SelectionRule};
use crate::models::Process;

/// Shortest original burst first.
///
/// Ties broken by earliest arrival, then lowest process id. Selecting by the
/// *original* burst (never a remaining counter) is what makes the resulting
/// policy non-preemptive SJF rather than shortest-remaining-time.
///
/// # Reference
/// Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        (process.burst, process.arrival, process.id, 0)
    }

    fn description(&self) -> &'static str {
        "Shortest-job-first (non-preemptive)"
    }
}

/// Lowest priority value first.
///
/// Burst duration is the first tie-break, arrival time the second, process
/// id last.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl SelectionRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> SelectionKey {
        (process.priority, process.burst, process.arrival, process.id)
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive, lower value wins)"
    }
}
