// src/model/status.rs

//! Task status state machine and priority ordering.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
///
/// Serialized spellings match the tracker's wire format (`not_started`,
/// `in_progress`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task created but not yet started (initial state).
    #[default]
    NotStarted,
    /// Task is actively being worked on.
    InProgress,
    /// Task is paused by one or more open blockers.
    Blocked,
    /// Task finished (terminal).
    Completed,
    /// Task explicitly paused by its owner; no date side effects.
    OnHold,
}

impl TaskStatus {
    /// Returns true if this is the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether a caller-driven transition `from -> to` is legal.
    ///
    /// The table is deliberately explicit so that "which transitions are
    /// legal" is a reviewable artifact:
    ///
    /// - `NotStarted -> InProgress | Blocked | Completed | OnHold`
    /// - `InProgress -> Blocked | Completed | OnHold`
    /// - `Blocked    -> NotStarted | Completed | OnHold`
    /// - `OnHold     -> NotStarted | InProgress | Blocked | Completed`
    /// - identity transitions are allowed for every non-terminal status
    ///   (a no-op update carrying completion/notes)
    /// - nothing leaves `Completed`, not even `Completed -> Completed`
    pub fn can_transition(from: TaskStatus, to: TaskStatus) -> bool {
        use TaskStatus::*;

        if from.is_terminal() {
            return false;
        }
        if from == to {
            return true;
        }

        match (from, to) {
            (NotStarted, InProgress | Blocked | Completed | OnHold) => true,
            (InProgress, Blocked | Completed | OnHold) => true,
            (Blocked, NotStarted | Completed | OnHold) => true,
            (OnHold, NotStarted | InProgress | Blocked | Completed) => true,
            _ => false,
        }
    }
}

/// Task priority, ordered by decreasing urgency.
///
/// `Critical < High < Medium < Low` in the derived `Ord`, so sorting
/// ascending puts the most urgent work first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Urgency rank: 0 for the most urgent.
    pub fn urgency_rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}
