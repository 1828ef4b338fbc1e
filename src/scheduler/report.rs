//! Run metrics.
//!
//! Computes load-balancing and utilization indicators from a cluster whose
//! tasks have all been placed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Simulation Time | Largest unit makespan |
//! | Overall Avg Wait | Mean of per-unit average waits (not task-weighted) |
//! | Task-Weighted Avg Wait | Mean start time over all tasks |
//! | Overall Avg Utilization | Mean of per-unit utilization (%) |
//! | Load Balancing | Population std dev of unit makespans |

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Policy;
use crate::models::{Cluster, ExecutionUnit};

/// Per-unit row of a [`SimulationReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReport {
    /// Unit identifier.
    pub id: u32,
    /// Number of tasks placed on the unit.
    pub task_count: usize,
    /// Makespan of the unit.
    pub total_work_time: u64,
    /// Mean start time of the unit's tasks.
    pub average_wait_time: f64,
    /// Busy percentage relative to the total simulation time (0.0..=100.0).
    pub utilization: f64,
}

/// Outcome of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the placement.
    pub policy: Policy,
    /// Wall time spent placing tasks. Informational only.
    pub elapsed: Duration,
    /// Overall makespan.
    pub total_simulation_time: u64,
    /// One row per unit, in id order.
    pub units: Vec<UnitReport>,
    /// Mean of per-unit average waits.
    pub overall_average_wait: f64,
    /// Mean start time across every placed task.
    pub task_weighted_average_wait: f64,
    /// Mean of per-unit utilization (%).
    pub overall_average_utilization: f64,
    /// Population standard deviation of unit makespans.
    pub load_balancing_std_dev: f64,
}

impl SimulationReport {
    /// Computes the report from a fully placed cluster.
    ///
    /// `elapsed` starts at zero; see [`with_elapsed`](Self::with_elapsed).
    pub fn calculate(policy: Policy, cluster: &Cluster) -> Self {
        let total_simulation_time = cluster.makespan();

        let units: Vec<UnitReport> = cluster
            .units()
            .iter()
            .map(|unit| UnitReport {
                id: unit.id(),
                task_count: unit.task_count(),
                total_work_time: unit.total_work_time(),
                average_wait_time: unit.average_wait_time(),
                utilization: unit.utilization(total_simulation_time),
            })
            .collect();

        let waits: Vec<f64> = units.iter().map(|u| u.average_wait_time).collect();
        let utilizations: Vec<f64> = units.iter().map(|u| u.utilization).collect();
        let workloads: Vec<f64> = units.iter().map(|u| u.total_work_time as f64).collect();

        let task_count = cluster.total_task_count();
        let task_weighted_average_wait = if task_count == 0 {
            0.0
        } else {
            let total_wait: u64 = cluster
                .units()
                .iter()
                .flat_map(ExecutionUnit::tasks)
                .map(|t| t.wait_time())
                .sum();
            total_wait as f64 / task_count as f64
        };

        Self {
            policy,
            elapsed: Duration::ZERO,
            total_simulation_time,
            overall_average_wait: mean(&waits),
            task_weighted_average_wait,
            overall_average_utilization: mean(&utilizations),
            load_balancing_std_dev: population_std_dev(&workloads),
            units,
        }
    }

    /// Attaches the measured wall time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Number of tasks placed across all units.
    pub fn task_count(&self) -> usize {
        self.units.iter().map(|u| u.task_count).sum()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Divides by N, not N-1.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation completed in {} ms", self.elapsed.as_millis())?;
        writeln!(
            f,
            "Total simulation time: {} units",
            self.total_simulation_time
        )?;
        writeln!(f)?;
        writeln!(f, "VM\tTasks\tTotal Time\tAvg Wait\tUtilization")?;
        writeln!(f, "{}", "-".repeat(48))?;
        for unit in &self.units {
            writeln!(
                f,
                "{}\t{}\t{}\t\t{:.1}\t\t{:.1}%",
                unit.id,
                unit.task_count,
                unit.total_work_time,
                unit.average_wait_time,
                unit.utilization
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Overall Average Wait Time: {:?}", self.overall_average_wait)?;
        writeln!(
            f,
            "Overall Average Utilization: {:?}%",
            self.overall_average_utilization
        )?;
        write!(
            f,
            "Load Balancing (Std Dev of Workloads): {:?}",
            self.load_balancing_std_dev
        )
    }
}
