// src/analysis/mod.rs

//! Pure read-side computations over the tracker state.
//!
//! - [`readiness`]: which tasks can start now, which are blocked/overdue.
//! - [`workload`]: per-agent status counts and remaining effort.
//! - [`health`]: the 0-100 project health score.
//! - [`violations`]: missing dependencies, cycles, premature starts.
//! - [`report`]: aggregate status report for export.
//!
//! Everything here recomputes from current state; nothing caches.

pub mod health;
pub mod readiness;
pub mod report;
pub mod violations;
pub mod workload;

pub use health::ProjectHealth;
pub use report::StatusReport;
pub use violations::{Violation, ViolationKind};
pub use workload::AgentWorkload;
