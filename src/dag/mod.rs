// src/dag/mod.rs

//! Dependency graph representation and the critical-path engine.
//!
//! - [`graph`] holds the adjacency index (dependencies and dependents)
//!   keyed by task id, maintained by the tracker's mutation path.
//! - [`critical_path`] computes the longest-duration chain through the
//!   graph (critical-path method over a DAG).

pub mod critical_path;
pub mod graph;

pub use critical_path::{CriticalPath, RiskLevel};
pub use graph::DepGraph;
