// src/analysis/workload.rs

//! Per-agent workload aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::TaskStatus;
use crate::tracker::Tracker;

/// Aggregate workload for one agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentWorkload {
    pub not_started: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub completed: usize,
    pub on_hold: usize,
    /// Sum of estimates over all of the agent's tasks.
    pub total_estimated_days: u64,
    /// Sum of estimated_days * (1 - completion/100) over non-completed tasks.
    pub remaining_days: f64,
}

/// Workload per agent, keyed by agent name (deterministic order).
pub fn agent_workload(tracker: &Tracker) -> BTreeMap<String, AgentWorkload> {
    let mut workload: BTreeMap<String, AgentWorkload> = BTreeMap::new();

    for task in tracker.tasks_in_order() {
        let entry = workload.entry(task.agent.clone()).or_default();

        match task.status {
            TaskStatus::NotStarted => entry.not_started += 1,
            TaskStatus::InProgress => entry.in_progress += 1,
            TaskStatus::Blocked => entry.blocked += 1,
            TaskStatus::Completed => entry.completed += 1,
            TaskStatus::OnHold => entry.on_hold += 1,
        }

        entry.total_estimated_days += u64::from(task.estimated_days);

        if !task.is_completed() {
            entry.remaining_days +=
                f64::from(task.estimated_days) * (1.0 - task.completion_percentage / 100.0);
        }
    }

    workload
}
