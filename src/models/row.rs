//! Per-process result row.
//!
//! One `ScheduleRow` is emitted per completed process. The timing identities
//!
//! ```text
//! turnaround = completion - arrival
//! waiting    = turnaround - burst
//! ```
//!
//! hold exactly for every row, in every policy. [`ScheduleRow::from_completion`]
//! is the only place they are computed.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// Timing record for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Completed process.
    pub process: ProcessId,
    /// Priority it was loaded with.
    pub priority: i64,
    /// Original burst duration (not the remaining counter).
    pub burst: i64,
    /// Arrival time.
    pub arrival: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Total time in the system.
    pub turnaround: i64,
    /// Time at which the process finished.
    pub completion: i64,
}

impl ScheduleRow {
    /// Derives the row for a process that completed at `completion`.
    ///
    /// `process.burst` must be the original burst, not a decremented
    /// remaining counter.
    pub fn from_completion(process: &Process, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            process: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            waiting: turnaround - process.burst,
            turnaround,
            completion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_identities() {
        let p = Process::new(2, 1, 3).with_priority(4);
        let row = ScheduleRow::from_completion(&p, 9);

        assert_eq!(row.process, 2);
        assert_eq!(row.priority, 4);
        assert_eq!(row.burst, 3);
        assert_eq!(row.arrival, 1);
        assert_eq!(row.completion, 9);
        assert_eq!(row.turnaround, 8); // 9 - 1
        assert_eq!(row.waiting, 5); // 8 - 3
    }

    #[test]
    fn test_zero_waiting() {
        // Runs immediately on arrival: waiting is exactly zero.
        let p = Process::new(1, 4, 6);
        let row = ScheduleRow::from_completion(&p, 10);
        assert_eq!(row.waiting, 0);
        assert_eq!(row.turnaround, 6);
    }
}
