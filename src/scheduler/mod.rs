//! Placement policies and run metrics.
//!
//! Provides the two task-placement policies and the report computed over a
//! cluster once every task has been placed.
//!
//! # Policies
//!
//! - **Round Robin**: positional; task *k* goes to unit `k mod N`.
//! - **Shortest Job First**: tasks sorted by duration (stable), each placed
//!   on the currently least-loaded unit.
//!
//! Both are single linear passes: no retries, no rebalancing, no lookahead.
//! Neither holds hidden state, so running the same policy on the same input
//! and a fresh cluster always reproduces the same placement.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! (parallel machine models, LPT/SPT list scheduling)

mod report;
mod round_robin;
mod sjf;

pub use report::{SimulationReport, UnitReport};
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SimError;
use crate::models::{Cluster, Task};
use crate::validation::validate_tasks;

/// A task-placement policy.
///
/// Implementations decide, for every task in the input, which unit of the
/// cluster receives it and in what order tasks are appended.
pub trait Scheduler: Send + Sync + Debug {
    /// Policy name (e.g., "Round Robin").
    fn name(&self) -> &'static str;

    /// Places every task onto the cluster.
    ///
    /// Assumes `tasks` has already passed [`validate_tasks`].
    ///
    /// # Errors
    /// [`SimError::TimeOverflow`] if a unit's timeline would overflow.
    fn place(&self, tasks: &[Task], cluster: &mut Cluster) -> Result<(), SimError>;

    /// Validates `tasks` and places them onto the cluster.
    ///
    /// # Errors
    /// [`SimError::InvalidTasks`] if validation fails; the cluster is left
    /// untouched in that case. Validation bounds the total duration, so a
    /// fresh cluster never hits [`SimError::TimeOverflow`].
    fn schedule(&self, tasks: &[Task], cluster: &mut Cluster) -> Result<(), SimError> {
        if let Err(errors) = validate_tasks(tasks) {
            warn!(
                policy = self.name(),
                problems = errors.len(),
                "rejecting task list"
            );
            return Err(SimError::InvalidTasks(errors));
        }

        self.place(tasks, cluster)?;

        info!(
            policy = self.name(),
            units = cluster.len(),
            tasks = tasks.len(),
            makespan = cluster.makespan(),
            "placement complete"
        );
        Ok(())
    }
}

/// Selectable placement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// See [`RoundRobin`].
    RoundRobin,
    /// See [`ShortestJobFirst`].
    ShortestJobFirst,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 2] = [Policy::RoundRobin, Policy::ShortestJobFirst];

    /// The scheduler implementing this policy.
    pub fn scheduler(self) -> &'static dyn Scheduler {
        match self {
            Policy::RoundRobin => &RoundRobin,
            Policy::ShortestJobFirst => &ShortestJobFirst,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheduler().name())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "round-robin" | "roundrobin" | "rr" => Ok(Policy::RoundRobin),
            "shortest-job-first" | "sjf" => Ok(Policy::ShortestJobFirst),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}
