//! Task model.
//!
//! A task is an indivisible unit of work with a fixed duration. Before
//! placement it is a plain [`Task`]; once an execution unit accepts it, the
//! unit produces a [`PlacedTask`] carrying the computed start and end times.
//!
//! # Time Representation
//! All times are abstract simulation time units relative to t=0, the moment
//! every unit in the cluster becomes available.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A task awaiting placement.
///
/// Immutable work descriptor. Copies are handed to each scheduling run so
/// that independent runs never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier (positive, unique within a run).
    pub id: u32,
    /// Processing time in simulation units (positive).
    pub duration: u64,
}

/// A task that has been placed on an execution unit.
///
/// Invariant: `end == start + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTask {
    /// Identifier of the originating task.
    pub id: u32,
    /// Processing time in simulation units.
    pub duration: u64,
    /// Time at which execution starts (equals the wait time).
    pub start: u64,
    /// Time at which execution completes.
    pub end: u64,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: u32, duration: u64) -> Self {
        Self { id, duration }
    }

    /// Builds a task list from raw durations, assigning ids `1..=n` in order.
    pub fn from_durations(durations: &[u64]) -> Vec<Self> {
        durations
            .iter()
            .zip(1u32..)
            .map(|(&duration, id)| Self::new(id, duration))
            .collect()
    }

    /// Places this task at `start`, producing the placed record.
    ///
    /// Returns `None` if the end time does not fit in `u64`.
    pub fn place_at(self, start: u64) -> Option<PlacedTask> {
        let end = start.checked_add(self.duration)?;
        Some(PlacedTask {
            id: self.id,
            duration: self.duration,
            start,
            end,
        })
    }
}

impl PlacedTask {
    /// Time spent waiting before execution.
    ///
    /// Units never preempt and all tasks are available at t=0, so this is
    /// the start time.
    pub fn wait_time(&self) -> u64 {
        self.start
    }

    /// Returns the unplaced task this record was created from.
    pub fn task(&self) -> Task {
        Task::new(self.id, self.duration)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task-{} ({} units)", self.id, self.duration)
    }
}
