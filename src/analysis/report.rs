// src/analysis/report.rs

//! Aggregate status report for export.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{health, readiness, violations, workload};
use crate::analysis::{AgentWorkload, ProjectHealth, Violation};
use crate::dag::{critical_path, CriticalPath};
use crate::model::TaskId;
use crate::tracker::{Snapshot, Tracker};

/// Everything a dashboard or reviewer needs in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub report_date: DateTime<Utc>,
    pub project_health: ProjectHealth,
    pub critical_path: CriticalPath,
    pub ready_tasks: Vec<TaskId>,
    pub blocked_tasks: Vec<(TaskId, Vec<String>)>,
    pub overdue_tasks: Vec<TaskId>,
    pub agent_workload: BTreeMap<String, AgentWorkload>,
    pub violations: Vec<Violation>,
    /// Full state for archival / round-tripping.
    pub state: Snapshot,
}

/// Assemble the full status report from current state.
pub fn status_report(
    tracker: &Tracker,
    project_window_days: i64,
    now: DateTime<Utc>,
) -> StatusReport {
    StatusReport {
        report_date: now,
        project_health: health::project_health(tracker, project_window_days, now),
        critical_path: critical_path::compute(tracker, project_window_days),
        ready_tasks: readiness::ready_tasks(tracker),
        blocked_tasks: readiness::blocked_tasks(tracker),
        overdue_tasks: readiness::overdue_tasks(tracker, now),
        agent_workload: workload::agent_workload(tracker),
        violations: violations::detect(tracker),
        state: tracker.to_snapshot(),
    }
}
