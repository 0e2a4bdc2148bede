// src/model/mod.rs

//! Domain model for the dependency tracker.
//!
//! - [`ids`] provides typed identifiers for tasks and blockers.
//! - [`status`] holds the task status state machine and priority ordering.
//! - [`task`] defines the [`Task`] record and the [`TaskSpec`] creation input.
//! - [`blocker`] defines the [`Blocker`] record and its lifecycle fields.

pub mod blocker;
pub mod ids;
pub mod status;
pub mod task;

pub use blocker::{Blocker, BlockerType};
pub use ids::{BlockerId, TaskId};
pub use status::{Priority, TaskStatus};
pub use task::{Task, TaskSpec};
