// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::model::{BlockerType, Priority, TaskStatus};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Track task dependencies, blockers, and the critical path.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Taskdag.toml` in the current working directory. A
    /// missing config file is fine; defaults apply.
    #[arg(long, value_name = "PATH", default_value_t = crate::config::default_config_path())]
    pub config: String,

    /// Override the state file from the config.
    #[arg(long, value_name = "PATH")]
    pub state: Option<String>,

    /// Override the project window (in days) from the config.
    #[arg(long, value_name = "DAYS")]
    pub window_days: Option<i64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an empty state file.
    Init,

    /// Add a task.
    AddTask {
        name: String,
        agent: String,
        /// Estimated effort in whole days (> 0).
        days: u32,
        #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
        /// Task ids this task depends on (repeatable).
        #[arg(long = "after", value_name = "TASK_ID")]
        after: Vec<String>,
        /// Expected deliverables (repeatable).
        #[arg(long = "deliverable", value_name = "TEXT")]
        deliverables: Vec<String>,
        /// Success criteria (repeatable).
        #[arg(long = "criterion", value_name = "TEXT")]
        success_criteria: Vec<String>,
    },

    /// Update a task's status and progress.
    UpdateTask {
        task_id: String,
        #[arg(value_enum)]
        status: StatusArg,
        /// Completion percentage (0-100).
        #[arg(long)]
        progress: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Attach a blocker to a task.
    AddBlocker {
        task_id: String,
        #[arg(value_enum)]
        blocker_type: BlockerTypeArg,
        description: String,
        impact: String,
        #[arg(long)]
        assigned_to: Option<String>,
    },

    /// Resolve a blocker.
    ResolveBlocker {
        blocker_id: String,
        notes: String,
    },

    /// Escalate a blocker for management attention.
    EscalateBlocker { blocker_id: String },

    /// Show project health.
    Status,

    /// Show the critical path.
    CriticalPath,

    /// Show tasks that are ready to start.
    ReadyTasks,

    /// Show blocked tasks with their open blockers.
    BlockedTasks,

    /// Show tasks running past their estimate.
    OverdueTasks,

    /// Show per-agent workload.
    Workload,

    /// Show dependency violations.
    Violations,

    /// Seed the tracker from the config's [task.*] plan sections.
    ImportPlan,

    /// Export the full status report as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Priority as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum PriorityArg {
    Critical,
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Critical => Priority::Critical,
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Task status as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum StatusArg {
    NotStarted,
    InProgress,
    Blocked,
    Completed,
    OnHold,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::NotStarted => TaskStatus::NotStarted,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Blocked => TaskStatus::Blocked,
            StatusArg::Completed => TaskStatus::Completed,
            StatusArg::OnHold => TaskStatus::OnHold,
        }
    }
}

/// Blocker type as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum BlockerTypeArg {
    Dependency,
    Resource,
    Technical,
    External,
}

impl From<BlockerTypeArg> for BlockerType {
    fn from(arg: BlockerTypeArg) -> Self {
        match arg {
            BlockerTypeArg::Dependency => BlockerType::Dependency,
            BlockerTypeArg::Resource => BlockerType::Resource,
            BlockerTypeArg::Technical => BlockerType::Technical,
            BlockerTypeArg::External => BlockerType::External,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_comes_from_the_loader() {
        let args = CliArgs::try_parse_from(["taskdag", "status"]).unwrap();
        assert_eq!(args.config, crate::config::default_config_path());
        assert_eq!(args.config, "Taskdag.toml");
    }

    #[test]
    fn config_override_wins() {
        let args =
            CliArgs::try_parse_from(["taskdag", "--config", "other.toml", "status"]).unwrap();
        assert_eq!(args.config, "other.toml");
    }
}
