// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// [`RawPlanFile`].
///
/// This only performs TOML deserialization; it does **not** perform
/// semantic validation (plan DAG correctness, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlanFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawPlanFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - non-positive estimates,
///   - unknown or self `after` references,
///   - plan DAG cycles,
///   - basic `[project]` sanity.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlanFile> {
    let raw = load_from_path(&path)?;
    let plan = PlanFile::try_from(raw)?;
    Ok(plan)
}

/// Resolve the default config path, used as the CLI `--config` default.
///
/// Currently just `Taskdag.toml` in the current working directory; this
/// function exists so a `TASKDAG_CONFIG` env var or project-local
/// discovery can slot in later without touching callers.
pub fn default_config_path() -> String {
    "Taskdag.toml".to_string()
}
