//! Simulation driver.
//!
//! Runs each configured policy against the same task list, giving every
//! run its own freshly built cluster and its own copy of the tasks so runs
//! never observe each other's placements.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::error::SimError;
use crate::generator::TaskGenerator;
use crate::models::{Cluster, Task};
use crate::scheduler::{Policy, SimulationReport};

/// Simulation parameters.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of execution units per cluster.
    pub num_vms: usize,
    /// Number of tasks to generate.
    pub num_tasks: usize,
    /// Upper bound (inclusive) on generated task durations.
    pub max_task_duration: u64,
    /// RNG seed for task generation. `None` = nondeterministic.
    pub seed: Option<u64>,
    /// Policies to run, in order.
    pub policies: Vec<Policy>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_vms: 5,
            num_tasks: 20,
            max_task_duration: 10,
            seed: None,
            policies: Policy::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of execution units.
    pub fn with_vms(mut self, num_vms: usize) -> Self {
        self.num_vms = num_vms;
        self
    }

    /// Sets the number of generated tasks.
    pub fn with_tasks(mut self, num_tasks: usize) -> Self {
        self.num_tasks = num_tasks;
        self
    }

    /// Sets the maximum generated task duration.
    pub fn with_max_task_duration(mut self, max_task_duration: u64) -> Self {
        self.max_task_duration = max_task_duration;
        self
    }

    /// Sets the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    /// [`SimError::InvalidConfig`] on zero VMs, zero max duration, an
    /// empty policy list, VM or task counts beyond `u32::MAX`, or a
    /// worst-case total duration (`num_tasks * max_task_duration`) beyond
    /// `u64::MAX`.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_vms == 0 {
            return Err(SimError::InvalidConfig(
                "number of VMs must be at least 1".into(),
            ));
        }
        if u32::try_from(self.num_vms).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "number of VMs must be at most {}",
                u32::MAX
            )));
        }
        if u32::try_from(self.num_tasks).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "number of tasks must be at most {}",
                u32::MAX
            )));
        }
        if self.max_task_duration == 0 {
            return Err(SimError::InvalidConfig(
                "max task duration must be at least 1".into(),
            ));
        }
        let worst_case = u64::try_from(self.num_tasks)
            .ok()
            .and_then(|n| n.checked_mul(self.max_task_duration));
        if worst_case.is_none() {
            return Err(SimError::InvalidConfig(format!(
                "{} tasks of up to {} units exceed the time range",
                self.num_tasks, self.max_task_duration
            )));
        }
        if self.policies.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one policy is required".into(),
            ));
        }
        Ok(())
    }

    /// Generates a task list from these parameters.
    pub fn generate_tasks(&self) -> Result<Vec<Task>, SimError> {
        let generator = TaskGenerator::new(self.num_tasks, self.max_task_duration)?;
        let tasks = match self.seed {
            Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed)),
            None => generator.generate(&mut rand::rng()),
        };
        Ok(tasks)
    }
}

/// Runs placement policies over task lists.
///
/// # Example
/// ```
/// use vm_schedule::models::Task;
/// use vm_schedule::simulation::{Simulation, SimulationConfig};
///
/// let sim = Simulation::new(SimulationConfig::new().with_vms(2)).unwrap();
/// let reports = sim.run(&Task::from_durations(&[3, 1, 4, 2])).unwrap();
/// assert_eq!(reports[0].total_simulation_time, 7); // Round Robin
/// assert_eq!(reports[1].total_simulation_time, 6); // Shortest Job First
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation after validating `config`.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every configured policy on `tasks`, one report per policy.
    pub fn run(&self, tasks: &[Task]) -> Result<Vec<SimulationReport>, SimError> {
        self.config
            .policies
            .iter()
            .map(|&policy| self.run_policy(policy, tasks))
            .collect()
    }

    /// Runs a single policy on a fresh cluster.
    pub fn run_policy(
        &self,
        policy: Policy,
        tasks: &[Task],
    ) -> Result<SimulationReport, SimError> {
        let _span = info_span!("run", %policy).entered();

        let mut cluster = Cluster::new(self.config.num_vms)?;
        let started = Instant::now();
        policy.scheduler().schedule(tasks, &mut cluster)?;
        let elapsed = started.elapsed();

        let report = SimulationReport::calculate(policy, &cluster).with_elapsed(elapsed);
        info!(
            makespan = report.total_simulation_time,
            std_dev = report.load_balancing_std_dev,
            elapsed_us = elapsed.as_micros() as u64,
            "run finished"
        );
        Ok(report)
    }

    /// Generates tasks from the configuration and runs every policy.
    pub fn run_generated(&self) -> Result<(Vec<Task>, Vec<SimulationReport>), SimError> {
        let tasks = self.config.generate_tasks()?;
        info!(tasks = tasks.len(), seed = ?self.config.seed, "generated task list");
        let reports = self.run(&tasks)?;
        Ok((tasks, reports))
    }
}
