//! Process (input) model.
//!
//! A process is the unit of work fed to a scheduling policy: it becomes
//! eligible at its arrival time and needs its burst duration of CPU service.
//!
//! # Time Representation
//! All times are logical integer units relative to a simulation epoch (t=0).
//! There is no wall-clock mapping; one unit is whatever the input means by it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// Process identifier. A label only, never an ordering key.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// Immutable once loaded: policies that track remaining service work on
/// internal copies, never on these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run. Must be >= 0.
    pub arrival: i64,
    /// Total service time required. Must be > 0.
    pub burst: i64,
    /// Scheduling priority; lower value = higher priority. Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a new process with default (0) priority.
    pub fn new(id: ProcessId, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower value wins).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
