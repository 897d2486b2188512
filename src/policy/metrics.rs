//! Aggregate run metrics.
//!
//! Computed once per policy run, after every process has a result row.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting | mean(waiting) over all rows |
//! | Average Turnaround | mean(turnaround) over all rows |
//! | Throughput | row count / last completion time |

use serde::{Deserialize, Serialize};

use crate::models::ScheduleRow;

/// Aggregates for one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time across all completed processes.
    pub average_waiting: f64,
    /// Mean turnaround time across all completed processes.
    pub average_turnaround: f64,
    /// Completed processes per unit of elapsed simulated time.
    pub throughput: f64,
}

impl RunMetrics {
    /// Derives metrics from the result rows of a run.
    ///
    /// An empty run, or one whose last completion time is zero, yields
    /// all-zero metrics rather than a division error.
    pub fn calculate(rows: &[ScheduleRow]) -> Self {
        if rows.is_empty() {
            return Self {
                average_waiting: 0.0,
                average_turnaround: 0.0,
                throughput: 0.0,
            };
        }

        let count = rows.len() as f64;
        let total_waiting: i64 = rows.iter().map(|r| r.waiting).sum();
        let total_turnaround: i64 = rows.iter().map(|r| r.turnaround).sum();
        let last_completion = rows.iter().map(|r| r.completion).max().unwrap_or(0);

        let throughput = if last_completion > 0 {
            count / last_completion as f64
        } else {
            0.0
        };

        Self {
            average_waiting: total_waiting as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput,
        }
    }
}
