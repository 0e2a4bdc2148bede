// src/model/task.rs

//! The [`Task`] record and the [`TaskSpec`] creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Priority, TaskId, TaskStatus};

/// A unit of work owned by a named agent.
///
/// `dependencies` lists tasks that must reach `Completed` before this one
/// may start. The inverse adjacency ("blocks") is derived and lives in the
/// tracker's dependency graph, never on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, assigned at creation.
    pub id: TaskId,

    /// Human-readable task name.
    pub name: String,

    /// Owning agent identifier.
    pub agent: String,

    /// Current lifecycle status.
    pub status: TaskStatus,

    /// Scheduling priority.
    pub priority: Priority,

    /// Estimated effort in whole days (> 0, fixed at creation).
    pub estimated_days: u32,

    /// Actual whole days taken, derived when the task completes.
    pub actual_days: i64,

    /// Set on the first transition to `InProgress`.
    pub start_date: Option<DateTime<Utc>>,

    /// Set on the transition to `Completed`.
    pub end_date: Option<DateTime<Utc>>,

    /// Tasks that must complete before this one may start.
    ///
    /// May reference identifiers that do not (and will never) exist; a
    /// dangling reference is surfaced by the violation detector, not
    /// rejected at creation.
    pub dependencies: Vec<TaskId>,

    /// Concrete outputs expected from this task.
    pub deliverables: Vec<String>,

    /// Acceptance criteria for this task.
    pub success_criteria: Vec<String>,

    /// Completion percentage in [0, 100]; forced to 100 on completion.
    pub completion_percentage: f64,

    /// Free-form progress notes.
    pub notes: String,
}

impl Task {
    /// Materialize a task record from a creation spec with a fresh id.
    pub(crate) fn from_spec(id: TaskId, spec: TaskSpec) -> Self {
        Self {
            id,
            name: spec.name,
            agent: spec.agent,
            status: TaskStatus::NotStarted,
            priority: spec.priority,
            estimated_days: spec.estimated_days,
            actual_days: 0,
            start_date: None,
            end_date: None,
            dependencies: spec.dependencies,
            deliverables: spec.deliverables,
            success_criteria: spec.success_criteria,
            completion_percentage: 0.0,
            notes: String::new(),
        }
    }

    /// Returns true if the task is in the terminal state.
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Input for creating a task.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub name: String,
    pub agent: String,
    pub estimated_days: u32,
    pub dependencies: Vec<TaskId>,
    pub priority: Priority,
    pub deliverables: Vec<String>,
    pub success_criteria: Vec<String>,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, agent: impl Into<String>, estimated_days: u32) -> Self {
        Self {
            name: name.into(),
            agent: agent.into(),
            estimated_days,
            dependencies: Vec::new(),
            priority: Priority::default(),
            deliverables: Vec::new(),
            success_criteria: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn dependency(mut self, dep: TaskId) -> Self {
        self.dependencies.push(dep);
        self
    }

    pub fn dependencies(mut self, deps: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies.extend(deps);
        self
    }

    pub fn deliverable(mut self, deliverable: impl Into<String>) -> Self {
        self.deliverables.push(deliverable.into());
        self
    }

    pub fn success_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.success_criteria.push(criterion.into());
        self
    }
}
