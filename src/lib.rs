//! Offline VM task-placement simulator.
//!
//! Places a batch of independent tasks onto a fixed pool of virtual
//! machines under a chosen policy, then reports load-balancing and
//! utilization metrics over the resulting per-machine timelines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `PlacedTask`, `ExecutionUnit`, `Cluster`
//! - **`scheduler`**: Placement policies (Round Robin, Shortest Job First)
//!   and the `SimulationReport` metrics
//! - **`validation`**: Input integrity checks (duplicate IDs, zero durations)
//! - **`generator`**: Random task lists
//! - **`simulation`**: Configuration and the per-policy run driver
//!
//! # Model
//!
//! Deterministic given its input: no preemption, no task dependencies,
//! no wall-clock execution, no dynamic provisioning. All tasks are ready
//! at t=0 and each machine runs its tasks back-to-back.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SimError;
