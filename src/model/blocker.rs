// src/model/blocker.rs

//! The [`Blocker`] record: an open impediment attached to one task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{BlockerId, TaskId};

/// Category of impediment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockerType {
    /// Waiting on another task or team.
    Dependency,
    /// Missing people, hardware, or budget.
    Resource,
    /// A technical obstacle in the work itself.
    Technical,
    /// Outside the project's control.
    External,
}

/// An impediment that pauses a specific task until resolved.
///
/// Blockers are never deleted; resolution only stamps `resolved_at`,
/// preserving history for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blocker {
    /// Unique blocker identifier.
    pub id: BlockerId,

    /// The task this blocker impedes.
    pub task_id: TaskId,

    /// Category of impediment.
    pub blocker_type: BlockerType,

    /// What is blocking the task.
    pub description: String,

    /// Consequence of the blocker remaining open.
    pub impact: String,

    /// Who is responsible for resolving it.
    pub assigned_to: String,

    /// Notes recorded at resolution time.
    pub resolution_notes: String,

    /// When the blocker was reported (immutable).
    pub reported_at: DateTime<Utc>,

    /// When the blocker was resolved; set exactly once.
    pub resolved_at: Option<DateTime<Utc>>,

    /// Escalated for management attention; monotonic, never reset.
    pub escalated: bool,
}

impl Blocker {
    /// Returns true if the blocker has not been resolved yet.
    pub fn is_open(&self) -> bool {
        self.resolved_at.is_none()
    }
}
