// src/analysis/readiness.rs

//! Readiness queries: which tasks can start, which cannot, which are late.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{TaskId, TaskStatus};
use crate::tracker::Tracker;

/// Tasks that are ready to start right now.
///
/// A task is ready when its status is `NotStarted`, every dependency
/// that exists has completed, and it carries no open blocker. Dangling
/// dependency ids do not hold a task back here; they are reported as
/// violations instead.
///
/// Sorted by (urgency rank, estimated days): shortest, most urgent
/// ready work first. The sort is stable, so ties keep creation order.
pub fn ready_tasks(tracker: &Tracker) -> Vec<TaskId> {
    let mut ready: Vec<&TaskId> = tracker
        .tasks_in_order()
        .filter(|task| task.status == TaskStatus::NotStarted)
        .filter(|task| {
            task.dependencies.iter().all(|dep| {
                tracker
                    .get(dep)
                    .map_or(true, |d| d.status == TaskStatus::Completed)
            })
        })
        .filter(|task| tracker.open_blockers_for(&task.id).next().is_none())
        .map(|task| &task.id)
        .collect();

    ready.sort_by_key(|id| {
        let task = tracker.get(id);
        (
            task.map_or(u8::MAX, |t| t.priority.urgency_rank()),
            task.map_or(u32::MAX, |t| t.estimated_days),
        )
    });

    debug!(count = ready.len(), "ready tasks computed");
    ready.into_iter().cloned().collect()
}

/// Blocked tasks with the descriptions of their open blockers.
pub fn blocked_tasks(tracker: &Tracker) -> Vec<(TaskId, Vec<String>)> {
    tracker
        .tasks_in_order()
        .filter(|task| task.status == TaskStatus::Blocked)
        .map(|task| {
            let descriptions = tracker
                .open_blockers_for(&task.id)
                .map(|b| b.description.clone())
                .collect();
            (task.id.clone(), descriptions)
        })
        .collect()
}

/// Tasks that have been running (or stuck) longer than their estimate.
pub fn overdue_tasks(tracker: &Tracker, now: DateTime<Utc>) -> Vec<TaskId> {
    tracker
        .tasks_in_order()
        .filter(|task| {
            matches!(task.status, TaskStatus::InProgress | TaskStatus::Blocked)
                && task
                    .start_date
                    .is_some_and(|start| (now - start).num_days() > i64::from(task.estimated_days))
        })
        .map(|task| task.id.clone())
        .collect()
}
