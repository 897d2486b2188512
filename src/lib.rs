//! Offline CPU-scheduling simulator.
//!
//! Simulates classical scheduling disciplines over a fixed set of processes
//! described by arrival time, burst duration, and priority, and reports
//! per-process timing rows, a Gantt-style execution timeline, and aggregate
//! metrics. All time is a logical integer counter: this is a deterministic,
//! single-pass simulation, not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimeSlice`, `Timeline`,
//!   `ScheduleRow`
//! - **`policy`**: The four scheduling disciplines (FCFS, SJF, priority,
//!   round-robin) plus the `SelectionRule` trait, ready queue, and
//!   `RunMetrics`
//! - **`validation`**: Process-set integrity checks (duplicate ids, arrival
//!   and burst bounds)
//! - **`loader`**: CSV input adapter
//! - **`render`**: Plain-text reporter (banner, Gantt trace, schedule table)
//! - **`error`**: Crate-wide error type
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod loader;
pub mod models;
pub mod policy;
pub mod render;
pub mod validation;
