//! Cluster (data center) model.
//!
//! A fixed, ordered pool of execution units. Unit ids are `1..=N` in pool
//! order and the pool never grows or shrinks after construction.

use serde::{Deserialize, Serialize};

use super::ExecutionUnit;
use crate::error::SimError;

/// A fixed-size pool of execution units.
///
/// # Example
/// ```
/// use vm_schedule::models::{Cluster, Task};
///
/// let mut cluster = Cluster::new(2).unwrap();
/// cluster.unit_at_mut(0).append(Task::new(1, 4)).unwrap();
/// assert_eq!(cluster.least_loaded().id(), 2);
/// assert_eq!(cluster.makespan(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    units: Vec<ExecutionUnit>,
}

impl Cluster {
    /// Creates a cluster of `size` idle units with ids `1..=size`.
    ///
    /// # Errors
    /// - [`SimError::EmptyCluster`] if `size` is zero.
    /// - [`SimError::InvalidConfig`] if `size` exceeds `u32::MAX` (unit ids
    ///   are `u32`).
    pub fn new(size: usize) -> Result<Self, SimError> {
        if size == 0 {
            return Err(SimError::EmptyCluster);
        }
        let count = u32::try_from(size).map_err(|_| {
            SimError::InvalidConfig(format!(
                "cluster size {size} exceeds the maximum of {}",
                u32::MAX
            ))
        })?;
        let units = (1..=count).map(ExecutionUnit::new).collect();
        Ok(Self { units })
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false`; construction rejects empty clusters.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units in id order.
    pub fn units(&self) -> &[ExecutionUnit] {
        &self.units
    }

    /// Unit at a 0-based position.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn unit_at(&self, index: usize) -> &ExecutionUnit {
        &self.units[index]
    }

    /// Mutable unit at a 0-based position.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn unit_at_mut(&mut self, index: usize) -> &mut ExecutionUnit {
        &mut self.units[index]
    }

    /// Position of the unit with the smallest total work time.
    ///
    /// Ties resolve to the first minimum encountered in id order
    /// (`min_by_key` keeps the first of equal elements).
    pub fn least_loaded_index(&self) -> usize {
        self.units
            .iter()
            .enumerate()
            .min_by_key(|(_, unit)| unit.total_work_time())
            .map(|(index, _)| index)
            .unwrap_or(0)
    }

    /// The unit with the smallest total work time (lowest id on ties).
    pub fn least_loaded(&self) -> &ExecutionUnit {
        self.unit_at(self.least_loaded_index())
    }

    /// Mutable access to the least-loaded unit.
    pub fn least_loaded_mut(&mut self) -> &mut ExecutionUnit {
        let index = self.least_loaded_index();
        self.unit_at_mut(index)
    }

    /// Overall makespan: the largest total work time across units.
    pub fn makespan(&self) -> u64 {
        self.units
            .iter()
            .map(ExecutionUnit::total_work_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of placed tasks across all units.
    pub fn total_task_count(&self) -> usize {
        self.units.iter().map(ExecutionUnit::task_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_new_assigns_sequential_ids() {
        let cluster = Cluster::new(3).unwrap();
        let ids: Vec<u32> = cluster.units().iter().map(ExecutionUnit::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(cluster.len(), 3);
        assert!(!cluster.is_empty());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(Cluster::new(0), Err(SimError::EmptyCluster)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_new_rejects_size_beyond_u32() {
        let too_big = u32::MAX as usize + 1;
        assert!(matches!(
            Cluster::new(too_big),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            Cluster::new(too_big + 2),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_least_loaded_ties_pick_first() {
        let cluster = Cluster::new(4).unwrap();
        assert_eq!(cluster.least_loaded_index(), 0);
        assert_eq!(cluster.least_loaded().id(), 1);
    }

    #[test]
    fn test_least_loaded_after_placements() {
        let mut cluster = Cluster::new(3).unwrap();
        cluster.unit_at_mut(0).append(Task::new(1, 5)).unwrap();
        cluster.unit_at_mut(1).append(Task::new(2, 2)).unwrap();
        cluster.unit_at_mut(2).append(Task::new(3, 2)).unwrap();
        // Units 2 and 3 tie at 2; the first wins.
        assert_eq!(cluster.least_loaded().id(), 2);

        cluster.least_loaded_mut().append(Task::new(4, 1)).unwrap();
        assert_eq!(cluster.least_loaded().id(), 3);
    }

    #[test]
    fn test_makespan_and_counts() {
        let mut cluster = Cluster::new(2).unwrap();
        assert_eq!(cluster.makespan(), 0);
        cluster.unit_at_mut(0).append(Task::new(1, 3)).unwrap();
        cluster.unit_at_mut(1).append(Task::new(2, 6)).unwrap();
        cluster.unit_at_mut(0).append(Task::new(3, 1)).unwrap();
        assert_eq!(cluster.makespan(), 6);
        assert_eq!(cluster.total_task_count(), 3);
    }

    #[test]
    #[should_panic]
    fn test_unit_at_out_of_range() {
        let cluster = Cluster::new(2).unwrap();
        let _ = cluster.unit_at(2);
    }
}
