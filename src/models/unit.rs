//! Execution unit (virtual machine) model.
//!
//! An execution unit runs its assigned tasks strictly back-to-back in
//! assignment order, with no preemption and no idle gaps. Its timeline is
//! append-only.

use serde::{Deserialize, Serialize};

use super::{PlacedTask, Task};
use crate::error::SimError;

/// A single-queue, non-preemptive virtual machine.
///
/// # Invariants
/// - `cursor` equals the `end` of the last placed task, or 0 if none.
/// - Placed tasks are contiguous: each starts where the previous one ended.
///
/// # Example
/// ```
/// use vm_schedule::models::{ExecutionUnit, Task};
///
/// let mut vm = ExecutionUnit::new(1);
/// vm.append(Task::new(1, 3)).unwrap();
/// let placed = vm.append(Task::new(2, 2)).unwrap();
/// assert_eq!(placed.start, 3);
/// assert_eq!(vm.total_work_time(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionUnit {
    id: u32,
    tasks: Vec<PlacedTask>,
    cursor: u64,
}

impl ExecutionUnit {
    /// Creates an idle unit.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            tasks: Vec::new(),
            cursor: 0,
        }
    }

    /// Unit identifier (1-based within its cluster).
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Placed tasks in placement order.
    pub fn tasks(&self) -> &[PlacedTask] {
        &self.tasks
    }

    /// Number of placed tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Appends a task at the end of the timeline.
    ///
    /// The task starts at the current cursor and the cursor advances by
    /// its duration. Returns the placed record.
    ///
    /// # Errors
    /// [`SimError::TimeOverflow`] if the end time does not fit in `u64`;
    /// the unit is left unchanged.
    pub fn append(&mut self, task: Task) -> Result<PlacedTask, SimError> {
        debug_assert!(task.duration > 0, "task {} has zero duration", task.id);
        let placed = task
            .place_at(self.cursor)
            .ok_or(SimError::TimeOverflow {
                task: task.id,
                unit: self.id,
            })?;
        self.cursor = placed.end;
        self.tasks.push(placed);
        Ok(placed)
    }

    /// Makespan of this unit so far.
    pub fn total_work_time(&self) -> u64 {
        self.cursor
    }

    /// Sum of the durations of all placed tasks.
    ///
    /// Never overflows: placements are contiguous, so the sum equals the
    /// cursor.
    pub fn busy_time(&self) -> u64 {
        self.tasks.iter().map(|t| t.duration).sum()
    }

    /// Mean start time of the placed tasks (0.0 when idle).
    pub fn average_wait_time(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let total_wait: u64 = self.tasks.iter().map(PlacedTask::wait_time).sum();
        total_wait as f64 / self.tasks.len() as f64
    }

    /// Busy percentage relative to `total_simulation_time` (0.0..=100.0).
    ///
    /// Returns 0.0 when `total_simulation_time` is zero.
    pub fn utilization(&self, total_simulation_time: u64) -> f64 {
        if total_simulation_time == 0 {
            return 0.0;
        }
        self.busy_time() as f64 / total_simulation_time as f64 * 100.0
    }
}
