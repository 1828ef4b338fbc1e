//! Round Robin placement.
//!
//! # Algorithm
//!
//! 1. Start a 0-based cursor at the first unit.
//! 2. Take tasks strictly in input order.
//! 3. Append each task to the unit under the cursor, then advance the
//!    cursor by one, wrapping at the cluster size.
//!
//! No sorting and no load awareness: the placement depends only on task
//! positions and the number of units.
//!
//! # Complexity
//! O(n) where n=tasks.

use tracing::debug;

use super::Scheduler;
use crate::error::SimError;
use crate::models::{Cluster, Task};

/// Positional round-robin placement.
///
/// # Example
///
/// ```
/// use vm_schedule::models::{Cluster, Task};
/// use vm_schedule::scheduler::{RoundRobin, Scheduler};
///
/// let tasks = Task::from_durations(&[3, 1, 4, 2]);
/// let mut cluster = Cluster::new(2).unwrap();
/// RoundRobin.schedule(&tasks, &mut cluster).unwrap();
/// assert_eq!(cluster.makespan(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn place(&self, tasks: &[Task], cluster: &mut Cluster) -> Result<(), SimError> {
        let mut cursor = 0;
        for &task in tasks {
            let unit = cluster.unit_at_mut(cursor);
            let placed = unit.append(task)?;
            debug!(
                task = placed.id,
                unit = unit.id(),
                start = placed.start,
                end = placed.end,
                "placed task"
            );
            cursor = (cursor + 1) % cluster.len();
        }
        Ok(())
    }
}
