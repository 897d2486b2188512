//! Input validation for process sets.
//!
//! Checks structural integrity of a loaded process set before any policy
//! runs. Detects:
//! - Duplicate process ids
//! - Negative arrival times
//! - Non-positive burst durations
//!
//! All failures are collected, not just the first.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same id.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a zero or negative burst duration.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process ids
/// 2. `arrival >= 0` for every process
/// 3. `burst > 0` for every process
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// An empty set is valid (a degenerate run with empty results).
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for p in processes {
        if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("process {} has negative arrival time {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process {} has non-positive burst {}", p.id, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
