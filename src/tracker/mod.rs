// src/tracker/mod.rs

//! The [`Tracker`]: single owner of the task and blocker stores.
//!
//! All mutations go through this type, which keeps the dependency graph
//! index and the blocker/status coupling consistent. Every mutating
//! operation validates before touching state, so a failed call leaves
//! the tracker unchanged. Read-side analyses live in [`crate::dag`] and
//! [`crate::analysis`] and take `&Tracker`.

pub mod snapshot;

pub use snapshot::Snapshot;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::dag::DepGraph;
use crate::errors::{Result, TaskdagError};
use crate::model::{Blocker, BlockerId, BlockerType, Task, TaskId, TaskSpec, TaskStatus};

/// In-memory store of tasks and blockers plus the derived adjacency index.
///
/// Creation order is tracked separately for both stores: it is the
/// determinism key for the critical-path tie-breaks and the snapshot
/// ordering.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    tasks: HashMap<TaskId, Task>,
    task_order: Vec<TaskId>,
    blockers: HashMap<BlockerId, Blocker>,
    blocker_order: Vec<BlockerId>,
    graph: DepGraph,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Read surface
    // ---------------------------------------------------------------

    /// Look up a task by id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Look up a blocker by id.
    pub fn get_blocker(&self, id: &BlockerId) -> Option<&Blocker> {
        self.blockers.get(id)
    }

    /// Tasks in creation order.
    pub fn tasks_in_order(&self) -> impl Iterator<Item = &Task> + Clone {
        self.task_order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Blockers in creation order.
    pub fn blockers_in_order(&self) -> impl Iterator<Item = &Blocker> + Clone {
        self.blocker_order
            .iter()
            .filter_map(|id| self.blockers.get(id))
    }

    pub fn task_count(&self) -> usize {
        self.task_order.len()
    }

    /// The dependency/dependents adjacency index.
    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    /// Derived inverse adjacency: tasks that list `id` as a dependency.
    pub fn blocks_of(&self, id: &TaskId) -> &[TaskId] {
        self.graph.dependents_of(id)
    }

    /// Open blockers attached to a task, in creation order.
    pub fn open_blockers_for<'a>(&'a self, task_id: &'a TaskId) -> impl Iterator<Item = &'a Blocker> {
        self.blockers_in_order()
            .filter(move |b| &b.task_id == task_id && b.is_open())
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Create a task from a spec, returning its fresh id.
    ///
    /// Dependencies referencing nonexistent ids are accepted (they
    /// surface later as violations); no cycle check is performed here.
    pub fn add_task(&mut self, spec: TaskSpec) -> Result<TaskId> {
        if spec.estimated_days == 0 {
            return Err(TaskdagError::InvalidArgument(format!(
                "estimated_days must be positive for task '{}'",
                spec.name
            )));
        }

        let id = TaskId::generate();
        let task = Task::from_spec(id.clone(), spec);

        self.graph.add_task(id.clone(), task.dependencies.clone());
        info!(task = %id, name = %task.name, agent = %task.agent, "task added");

        self.task_order.push(id.clone());
        self.tasks.insert(id.clone(), task);
        Ok(id)
    }

    /// Apply a caller-driven status transition with optional progress update.
    pub fn update_status(
        &mut self,
        id: &TaskId,
        new_status: TaskStatus,
        completion_percentage: Option<f64>,
        notes: Option<String>,
    ) -> Result<()> {
        self.update_status_at(id, new_status, completion_percentage, notes, Utc::now())
    }

    /// [`Tracker::update_status`] with an explicit clock, for deterministic tests.
    pub fn update_status_at(
        &mut self,
        id: &TaskId,
        new_status: TaskStatus,
        completion_percentage: Option<f64>,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        // Validate everything before mutating.
        let old_status = self
            .tasks
            .get(id)
            .map(|t| t.status)
            .ok_or_else(|| TaskdagError::TaskNotFound(id.to_string()))?;

        if !TaskStatus::can_transition(old_status, new_status) {
            return Err(TaskdagError::InvalidTransition {
                from: old_status,
                to: new_status,
            });
        }

        if let Some(pct) = completion_percentage {
            if !(0.0..=100.0).contains(&pct) {
                return Err(TaskdagError::InvalidArgument(format!(
                    "completion percentage {pct} outside [0, 100]"
                )));
            }
        }

        let Some(task) = self.tasks.get_mut(id) else {
            return Err(TaskdagError::TaskNotFound(id.to_string()));
        };
        task.status = new_status;

        if let Some(pct) = completion_percentage {
            task.completion_percentage = pct;
        }
        if let Some(notes) = notes {
            task.notes = notes;
        }

        if old_status == TaskStatus::NotStarted
            && new_status == TaskStatus::InProgress
            && task.start_date.is_none()
        {
            task.start_date = Some(now);
        }

        if new_status == TaskStatus::Completed {
            task.end_date = Some(now);
            task.completion_percentage = 100.0;
            if let Some(start) = task.start_date {
                task.actual_days = (now - start).num_days();
            }
        }

        debug!(task = %id, from = ?old_status, to = ?new_status, "status updated");
        Ok(())
    }

    /// Attach a blocker to a task, forcing it to `Blocked` unless the
    /// task is already completed.
    pub fn add_blocker(
        &mut self,
        task_id: &TaskId,
        blocker_type: BlockerType,
        description: impl Into<String>,
        impact: impl Into<String>,
        assigned_to: Option<String>,
    ) -> Result<BlockerId> {
        self.add_blocker_at(task_id, blocker_type, description, impact, assigned_to, Utc::now())
    }

    /// [`Tracker::add_blocker`] with an explicit clock.
    pub fn add_blocker_at(
        &mut self,
        task_id: &TaskId,
        blocker_type: BlockerType,
        description: impl Into<String>,
        impact: impl Into<String>,
        assigned_to: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<BlockerId> {
        if !self.tasks.contains_key(task_id) {
            return Err(TaskdagError::TaskNotFound(task_id.to_string()));
        }

        let id = BlockerId::generate();
        let blocker = Blocker {
            id: id.clone(),
            task_id: task_id.clone(),
            blocker_type,
            description: description.into(),
            impact: impact.into(),
            assigned_to: assigned_to.unwrap_or_default(),
            resolution_notes: String::new(),
            reported_at: now,
            resolved_at: None,
            escalated: false,
        };

        self.blocker_order.push(id.clone());
        self.blockers.insert(id.clone(), blocker);

        // Completed tasks are never blocked.
        if let Some(task) = self.tasks.get_mut(task_id) {
            if !task.is_completed() {
                task.status = TaskStatus::Blocked;
                info!(task = %task_id, blocker = %id, "task blocked");
            } else {
                warn!(
                    task = %task_id,
                    blocker = %id,
                    "blocker attached to a completed task; status unchanged"
                );
            }
        }

        Ok(id)
    }

    /// Resolve a blocker exactly once.
    ///
    /// If this was the task's last open blocker and the task is still
    /// `Blocked`, the task reverts to `NotStarted` (work resumes from
    /// scratch in scheduling terms).
    pub fn resolve_blocker(
        &mut self,
        id: &BlockerId,
        resolution_notes: impl Into<String>,
    ) -> Result<()> {
        self.resolve_blocker_at(id, resolution_notes, Utc::now())
    }

    /// [`Tracker::resolve_blocker`] with an explicit clock.
    pub fn resolve_blocker_at(
        &mut self,
        id: &BlockerId,
        resolution_notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let blocker = self
            .blockers
            .get_mut(id)
            .ok_or_else(|| TaskdagError::BlockerNotFound(id.to_string()))?;

        if blocker.resolved_at.is_some() {
            return Err(TaskdagError::AlreadyResolved(id.to_string()));
        }

        blocker.resolved_at = Some(now);
        blocker.resolution_notes = resolution_notes.into();
        let task_id = blocker.task_id.clone();

        let still_blocked = self.open_blockers_for(&task_id).next().is_some();
        if !still_blocked {
            if let Some(task) = self.tasks.get_mut(&task_id) {
                if task.status == TaskStatus::Blocked {
                    task.status = TaskStatus::NotStarted;
                    info!(task = %task_id, blocker = %id, "last blocker resolved; task unblocked");
                }
            }
        } else {
            debug!(task = %task_id, blocker = %id, "blocker resolved; others still open");
        }

        Ok(())
    }

    /// Idempotently escalate a blocker for management attention.
    pub fn escalate_blocker(&mut self, id: &BlockerId) -> Result<()> {
        let blocker = self
            .blockers
            .get_mut(id)
            .ok_or_else(|| TaskdagError::BlockerNotFound(id.to_string()))?;

        blocker.escalated = true;
        info!(blocker = %id, task = %blocker.task_id, "blocker escalated");
        Ok(())
    }
}
