//! Random task generation.
//!
//! Produces the input task list for a simulation. Randomness lives only
//! here; the placement policies are pure functions of the list they get.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::Task;

/// Generates task lists with uniformly random durations.
///
/// Tasks receive ids `1..=count` in generation order and durations drawn
/// uniformly from `[1, max_duration]`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vm_schedule::generator::TaskGenerator;
///
/// let generator = TaskGenerator::new(20, 10).unwrap();
/// let tasks = generator.generate(&mut StdRng::seed_from_u64(7));
/// assert_eq!(tasks.len(), 20);
/// assert!(tasks.iter().all(|t| (1..=10).contains(&t.duration)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGenerator {
    count: u32,
    max_duration: u64,
}

impl TaskGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    /// [`SimError::InvalidConfig`] if `max_duration` is zero or `count`
    /// exceeds `u32::MAX` (task ids are `u32`).
    pub fn new(count: usize, max_duration: u64) -> Result<Self, SimError> {
        if max_duration == 0 {
            return Err(SimError::InvalidConfig(
                "max task duration must be at least 1".into(),
            ));
        }
        let count = u32::try_from(count).map_err(|_| {
            SimError::InvalidConfig(format!(
                "task count {count} exceeds the maximum of {}",
                u32::MAX
            ))
        })?;
        Ok(Self {
            count,
            max_duration,
        })
    }

    /// Number of tasks per generated list.
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Upper bound (inclusive) on task durations.
    pub fn max_duration(&self) -> u64 {
        self.max_duration
    }

    /// Draws a task list from `rng`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Task> {
        (1..=self.count)
            .map(|id| Task::new(id, rng.random_range(1..=self.max_duration)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_ids_and_bounds() {
        let generator = TaskGenerator::new(50, 4).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let tasks = generator.generate(&mut rng);

        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<u32>>());
        assert!(tasks.iter().all(|t| t.duration >= 1 && t.duration <= 4));
        assert!(crate::validation::validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = TaskGenerator::new(20, 10).unwrap();
        let a = generator.generate(&mut SmallRng::seed_from_u64(42));
        let b = generator.generate(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_duration_one() {
        let generator = TaskGenerator::new(5, 1).unwrap();
        let tasks = generator.generate(&mut SmallRng::seed_from_u64(1));
        assert!(tasks.iter().all(|t| t.duration == 1));
    }

    #[test]
    fn test_zero_count() {
        let generator = TaskGenerator::new(0, 10).unwrap();
        assert!(generator.generate(&mut SmallRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_rejects_count_beyond_u32() {
        assert!(matches!(
            TaskGenerator::new(u32::MAX as usize + 1, 10),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_max_duration() {
        assert!(matches!(
            TaskGenerator::new(5, 0),
            Err(SimError::InvalidConfig(_))
        ));
    }
}
