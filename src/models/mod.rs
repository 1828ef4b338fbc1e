//! Simulation domain models.
//!
//! Provides the data types for a task-placement simulation: the work
//! items, the machines that run them, and the fixed pool those machines
//! belong to.
//!
//! # Domain Mappings
//!
//! | vm-schedule | Cloud | Batch Cluster |
//! |-------------|-------|---------------|
//! | Task | Request/Job | Batch Job |
//! | ExecutionUnit | Virtual Machine | Worker Node |
//! | Cluster | Data Center | Partition |

mod cluster;
mod task;
mod unit;

pub use cluster::Cluster;
pub use task::{PlacedTask, Task};
pub use unit::ExecutionUnit;
