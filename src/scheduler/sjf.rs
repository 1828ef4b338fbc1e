//! Shortest-Job-First placement onto the least-loaded unit.
//!
//! # Algorithm
//!
//! 1. Stable-sort tasks by ascending duration; equal durations keep their
//!    input order.
//! 2. For each task in that order, append it to the unit with the smallest
//!    total work time (lowest id on ties).
//!
//! Greedy list scheduling: no lookahead and no rebalancing after a task is
//! placed, so the result is not optimal in general.
//!
//! # Complexity
//! O(n log n + n * m) where n=tasks, m=units.

use tracing::debug;

use super::Scheduler;
use crate::error::SimError;
use crate::models::{Cluster, Task};

/// Shortest-job-first ordering with least-loaded placement.
///
/// # Example
///
/// ```
/// use vm_schedule::models::{Cluster, Task};
/// use vm_schedule::scheduler::{Scheduler, ShortestJobFirst};
///
/// let tasks = Task::from_durations(&[3, 1, 4, 2]);
/// let mut cluster = Cluster::new(2).unwrap();
/// ShortestJobFirst.schedule(&tasks, &mut cluster).unwrap();
/// assert_eq!(cluster.makespan(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl ShortestJobFirst {
    /// Returns the tasks in processing order.
    pub fn order(tasks: &[Task]) -> Vec<Task> {
        let mut ordered = tasks.to_vec();
        ordered.sort_by_key(|t| t.duration);
        ordered
    }
}

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn place(&self, tasks: &[Task], cluster: &mut Cluster) -> Result<(), SimError> {
        for task in Self::order(tasks) {
            let unit = cluster.least_loaded_mut();
            let placed = unit.append(task)?;
            debug!(
                task = placed.id,
                unit = unit.id(),
                start = placed.start,
                end = placed.end,
                "placed task"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cluster: &Cluster, index: usize) -> Vec<u32> {
        cluster
            .unit_at(index)
            .tasks()
            .iter()
            .map(|t| t.id)
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let tasks = Task::from_durations(&[3, 1, 4, 2]);
        let mut cluster = Cluster::new(2).unwrap();
        ShortestJobFirst.schedule(&tasks, &mut cluster).unwrap();

        // task2 -> u1 (0-1), task4 -> u2 (0-2), task1 -> u1 (1-4), task3 -> u2 (2-6)
        assert_eq!(ids(&cluster, 0), vec![2, 1]);
        assert_eq!(ids(&cluster, 1), vec![4, 3]);
        assert_eq!(cluster.unit_at(0).total_work_time(), 4);
        assert_eq!(cluster.unit_at(1).total_work_time(), 6);
        assert_eq!(cluster.makespan(), 6);
    }

    #[test]
    fn test_order_is_stable() {
        let tasks = Task::from_durations(&[2, 1, 2, 1, 2]);
        let order: Vec<u32> = ShortestJobFirst::order(&tasks)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(order, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_processing_order_non_decreasing() {
        let tasks = Task::from_durations(&[7, 3, 9, 1, 4, 4, 2, 8]);
        let order = ShortestJobFirst::order(&tasks);
        assert!(order.windows(2).all(|w| w[0].duration <= w[1].duration));
    }

    #[test]
    fn test_ties_go_to_lowest_unit() {
        let tasks = Task::from_durations(&[5, 5, 5]);
        let mut cluster = Cluster::new(3).unwrap();
        ShortestJobFirst.schedule(&tasks, &mut cluster).unwrap();
        assert_eq!(ids(&cluster, 0), vec![1]);
        assert_eq!(ids(&cluster, 1), vec![2]);
        assert_eq!(ids(&cluster, 2), vec![3]);
    }

    #[test]
    fn test_deterministic() {
        let tasks = Task::from_durations(&[6, 2, 8, 3, 3, 9, 1, 4]);
        let mut first = Cluster::new(3).unwrap();
        let mut second = Cluster::new(3).unwrap();
        ShortestJobFirst.schedule(&tasks, &mut first).unwrap();
        ShortestJobFirst.schedule(&tasks, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_task_placed_once() {
        let tasks = Task::from_durations(&[6, 2, 8, 3, 3, 9, 1, 4, 7]);
        let mut cluster = Cluster::new(4).unwrap();
        ShortestJobFirst.schedule(&tasks, &mut cluster).unwrap();

        let mut placed: Vec<u32> = cluster
            .units()
            .iter()
            .flat_map(|u| u.tasks().iter().map(|t| t.id))
            .collect();
        placed.sort_unstable();
        assert_eq!(placed, (1..=9).collect::<Vec<u32>>());
        for unit in cluster.units() {
            assert_eq!(unit.total_work_time(), unit.busy_time());
        }
    }
}
