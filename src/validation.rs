//! Input validation for simulation runs.
//!
//! Checks the task list before any placement happens. Detects:
//! - Duplicate task IDs
//! - Task ID zero (IDs are positive)
//! - Zero durations (every task must occupy time on its unit)
//! - Total duration beyond `u64::MAX` (a single unit could not hold it)
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task ID is zero.
    InvalidId,
    /// A task has a zero duration.
    NonPositiveDuration,
    /// The sum of all durations does not fit in the time range.
    DurationOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a task list.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. All task IDs are positive
/// 3. All durations are positive
/// 4. The total duration fits in `u64`, so no unit timeline can overflow
///
/// An empty list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for task in tasks {
        if task.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Task ID must be positive, got 0",
            ));
        }

        if !seen.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Task {} has zero duration", task.id),
            ));
        }
    }

    let total = tasks
        .iter()
        .try_fold(0u64, |acc, task| acc.checked_add(task.duration));
    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOverflow,
            format!(
                "Total duration of {} tasks exceeds the time range",
                tasks.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let tasks = Task::from_durations(&[3, 1, 4, 2]);
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_tasks(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let tasks = vec![Task::new(1, 3), Task::new(1, 2)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_zero_duration() {
        let tasks = vec![Task::new(1, 0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveDuration);
        assert_eq!(errors[0].to_string(), "Task 1 has zero duration");
    }

    #[test]
    fn test_zero_id() {
        let tasks = vec![Task::new(0, 5)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidId);
    }

    #[test]
    fn test_total_duration_overflow() {
        let tasks = vec![Task::new(1, u64::MAX), Task::new(2, 5)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DurationOverflow);
    }

    #[test]
    fn test_total_duration_at_limit() {
        let tasks = vec![Task::new(1, u64::MAX - 5), Task::new(2, 5)];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let tasks = vec![Task::new(1, 0), Task::new(1, 0), Task::new(0, 1)];
        let errors = validate_tasks(&tasks).unwrap_err();
        // 2 zero durations + 1 duplicate + 1 zero id
        assert_eq!(errors.len(), 4);
    }
}
