//! Crate-wide error type.
//!
//! Load-time failures (unreadable file, malformed CSV, invalid process set)
//! and configuration failures (non-positive quantum) are all fatal: they are
//! surfaced before any simulation runs. Policy runs themselves cannot fail
//! once given a valid process set.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read scheduling file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed integer field '{value}' at line {line}, column {column}")]
    MalformedField {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("record at line {line} has {count} fields, expected 3 or 4")]
    MalformedRecord { line: u64, count: usize },

    #[error("invalid process set: {0}")]
    InvalidProcessSet(String),

    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
