//! vm-schedule: run the placement policies and print their reports.
//!
//! With no flags, simulates 20 random tasks on 5 VMs under Round Robin and
//! Shortest Job First.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vm_schedule::scheduler::Policy;
use vm_schedule::simulation::{Simulation, SimulationConfig};

/// VM scheduling simulator comparing task-placement policies.
#[derive(Parser, Debug)]
#[command(name = "vm-schedule", version, about)]
struct Cli {
    /// JSON file with simulation parameters. Flags override its values.
    #[arg(long, env = "VM_SCHEDULE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of virtual machines.
    #[arg(long)]
    vms: Option<usize>,

    /// Number of tasks to generate.
    #[arg(long)]
    tasks: Option<usize>,

    /// Maximum task duration (time units).
    #[arg(long)]
    max_duration: Option<u64>,

    /// Seed for task generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy to run (repeatable): round-robin, sjf.
    #[arg(long = "policy")]
    policies: Vec<Policy>,

    /// Print reports as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(SimulationConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(vms) = self.vms {
            config.num_vms = vms;
        }
        if let Some(tasks) = self.tasks {
            config.num_tasks = tasks;
        }
        if let Some(max_duration) = self.max_duration {
            config.max_task_duration = max_duration;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if !self.policies.is_empty() {
            config.policies = self.policies;
        }
        Ok((config, self.json))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, json) = Cli::parse().into_config()?;
    let simulation = Simulation::new(config).context("invalid simulation parameters")?;
    let (_tasks, reports) = simulation.run_generated()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let config = simulation.config();
    println!("=== VM Scheduling Simulation ===");
    println!("Number of VMs: {}", config.num_vms);
    println!("Number of tasks: {}", config.num_tasks);
    for report in &reports {
        println!();
        println!("--- {} Scheduling ---", report.policy);
        println!("{report}");
    }
    Ok(())
}
