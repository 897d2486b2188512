//! Simulation domain models.
//!
//! Core data types shared by every scheduling policy: the immutable input
//! record, the execution timeline, and the per-process result row.
//!
//! | Type | Role |
//! |------|------|
//! | [`Process`] | Input: one unit of work (id, arrival, burst, priority) |
//! | [`TimeSlice`] / [`Timeline`] | Output: the Gantt trace of a run |
//! | [`ScheduleRow`] | Output: timing metrics for one completed process |

mod process;
mod row;
mod timeline;

pub use process::{Process, ProcessId};
pub use row::ScheduleRow;
pub use timeline::{TimeSlice, Timeline};
