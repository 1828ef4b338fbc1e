//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised when a simulation run cannot proceed.
#[derive(Debug, Error)]
pub enum SimError {
    /// A cluster must contain at least one execution unit.
    #[error("cluster must contain at least one execution unit")]
    EmptyCluster,
    /// The task list failed input validation.
    #[error("invalid task list: {}", join_messages(.0))]
    InvalidTasks(Vec<ValidationError>),
    /// Simulation parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Placing a task would push a unit's timeline past `u64::MAX`.
    #[error("task {task} cannot be placed on unit {unit}: end time exceeds the time range")]
    TimeOverflow {
        /// Task being placed.
        task: u32,
        /// Unit whose timeline would overflow.
        unit: u32,
    },
    /// A policy name did not match any known scheduling policy.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
