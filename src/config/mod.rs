// src/config/mod.rs

//! Configuration loading and validation for taskdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`): `[project]`
//!   settings plus optional `[task.<name>]` plan sections.
//! - Load a config file from disk (`loader.rs`).
//! - Validate plan invariants like DAG correctness (`validate.rs`).
//!
//! Plan files are authored input, so unlike the tracker itself they are
//! validated strictly: unknown `after` references, self-dependencies and
//! cycles are rejected up front.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{PlanFile, PlanTask, ProjectSection, RawPlanFile};
