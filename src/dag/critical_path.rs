// src/dag/critical_path.rs

//! Longest-path computation over the task graph (critical-path method).

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{Priority, TaskId};
use crate::tracker::Tracker;

/// Risk classification derived from the schedule float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    fn from_float(total_float: i64) -> Self {
        if total_float < 0 {
            RiskLevel::High
        } else if total_float < 7 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Result of the critical-path computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Task ids along the longest-duration chain, in execution order.
    pub path: Vec<TaskId>,
    /// Sum of estimated days along `path`.
    pub total_duration: i64,
    /// Project window minus `total_duration` (negative = behind schedule).
    pub total_float: i64,
    /// Risk classification derived from `total_float`.
    pub risk_level: RiskLevel,
    /// On-path tasks whose delay fans out widely: priority-critical tasks
    /// and tasks with more than two dependents.
    pub bottlenecks: Vec<TaskId>,
}

/// Compute the critical path through the tracker's task graph.
///
/// Longest path in a DAG via Kahn's algorithm:
///
/// 1. In-degree of a task is the length of its dependency list,
///    *including* dangling ids. A task with a missing dependency can
///    never reach in-degree zero and is excluded from the path; the
///    violation detector reports it, this function does not.
/// 2. Relaxation over the dependents adjacency records the predecessor
///    achieving the maximum distance.
/// 3. Cycle members likewise never enqueue and are excluded, never a
///    hard failure.
///
/// Determinism: the queue is seeded in task creation order and the
/// end-of-path tie-break also follows creation order, so identical
/// input graphs always yield identical output.
///
/// `project_window_days` is the caller-supplied horizon used for the
/// float computation; it is an external input, not derived.
pub fn compute(tracker: &Tracker, project_window_days: i64) -> CriticalPath {
    let mut distances: HashMap<TaskId, i64> = HashMap::new();
    let mut predecessors: HashMap<TaskId, Option<TaskId>> = HashMap::new();
    let mut in_degree: HashMap<TaskId, usize> = HashMap::new();

    for task in tracker.tasks_in_order() {
        distances.insert(task.id.clone(), 0);
        predecessors.insert(task.id.clone(), None);
        in_degree.insert(task.id.clone(), task.dependencies.len());
    }

    let mut queue: VecDeque<TaskId> = tracker
        .tasks_in_order()
        .filter(|t| t.dependencies.is_empty())
        .map(|t| t.id.clone())
        .collect();

    let mut processed = 0usize;
    while let Some(current) = queue.pop_front() {
        processed += 1;
        let current_days = tracker
            .get(&current)
            .map(|t| i64::from(t.estimated_days))
            .unwrap_or(0);
        let current_distance = distances[&current];

        for successor in tracker.graph().dependents_of(&current).to_vec() {
            // `dependents_of` only names existing tasks, so both maps
            // have an entry for the successor.
            let candidate = current_distance + current_days;
            if let Some(entry) = distances.get_mut(&successor) {
                if candidate > *entry {
                    *entry = candidate;
                    predecessors.insert(successor.clone(), Some(current.clone()));
                }
            }

            if let Some(deg) = in_degree.get_mut(&successor) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(successor);
                }
            }
        }
    }

    if processed < tracker.task_count() {
        warn!(
            excluded = tracker.task_count() - processed,
            "tasks excluded from critical path (cycle or missing dependency)"
        );
    }

    // End of path: maximum distance + own duration, ties broken by
    // creation order (strict comparison while iterating in order).
    // Unprocessed tasks (in-degree never hit zero) are not candidates.
    let mut end: Option<(TaskId, i64)> = None;
    for task in tracker.tasks_in_order() {
        if in_degree[&task.id] > 0 {
            continue;
        }
        let finish = distances[&task.id] + i64::from(task.estimated_days);
        match &end {
            Some((_, best)) if *best >= finish => {}
            _ => end = Some((task.id.clone(), finish)),
        }
    }

    let (path, total_duration) = match end {
        Some((end_id, finish)) => {
            let mut path = Vec::new();
            let mut current = Some(end_id);
            while let Some(id) = current {
                path.push(id.clone());
                current = predecessors.get(&id).cloned().flatten();
            }
            path.reverse();
            (path, finish)
        }
        None => (Vec::new(), 0),
    };

    let total_float = project_window_days - total_duration;
    let risk_level = RiskLevel::from_float(total_float);

    let bottlenecks: Vec<TaskId> = path
        .iter()
        .filter(|id| {
            let fan_out = tracker.graph().dependents_of(id).len();
            let critical = tracker
                .get(id)
                .is_some_and(|t| t.priority == Priority::Critical);
            critical || fan_out > 2
        })
        .cloned()
        .collect();

    debug!(
        path_len = path.len(),
        total_duration,
        total_float,
        risk = %risk_level,
        "critical path computed"
    );

    CriticalPath {
        path,
        total_duration,
        total_float,
        risk_level,
        bottlenecks,
    }
}
