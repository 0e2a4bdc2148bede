// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::model::TaskStatus;

#[derive(Error, Debug)]
pub enum TaskdagError {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Blocker not found: {0}")]
    BlockerNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Blocker already resolved: {0}")]
    AlreadyResolved(String),

    #[error("Invalid status transition: {from:?} -> {to:?}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in plan DAG: {0}")]
    PlanCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskdagError>;
