// src/analysis/health.rs

//! Project health scoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::readiness;
use crate::dag::{critical_path, RiskLevel};
use crate::model::TaskStatus;
use crate::tracker::Tracker;

/// Overall project health metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHealth {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub blocked_tasks: usize,
    pub overdue_tasks: usize,
    pub open_blockers: usize,
    pub escalated_blockers: usize,
    /// Share of total estimated days that belong to completed tasks.
    pub progress_percentage: f64,
    pub schedule_float_days: i64,
    pub risk_level: RiskLevel,
    /// 0-100 composite score; higher is healthier.
    pub health_score: u8,
}

/// Compute the health score and its supporting counts.
///
/// Score: start at 100; subtract `min(30, 5 * blocked)`,
/// `min(20, 3 * overdue)` and `min(25, 10 * escalated open blockers)`;
/// subtract 20 if the critical-path float is negative, else 10 if it is
/// under a week; clamp to [0, 100].
pub fn project_health(
    tracker: &Tracker,
    project_window_days: i64,
    now: DateTime<Utc>,
) -> ProjectHealth {
    let total_tasks = tracker.task_count();
    let completed_tasks = tracker
        .tasks_in_order()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    let blocked_tasks = tracker
        .tasks_in_order()
        .filter(|t| t.status == TaskStatus::Blocked)
        .count();
    let overdue_tasks = readiness::overdue_tasks(tracker, now).len();

    let open_blockers = tracker.blockers_in_order().filter(|b| b.is_open()).count();
    let escalated_blockers = tracker
        .blockers_in_order()
        .filter(|b| b.is_open() && b.escalated)
        .count();

    let path = critical_path::compute(tracker, project_window_days);

    let total_estimated: u64 = tracker
        .tasks_in_order()
        .map(|t| u64::from(t.estimated_days))
        .sum();
    let completed_estimated: u64 = tracker
        .tasks_in_order()
        .filter(|t| t.status == TaskStatus::Completed)
        .map(|t| u64::from(t.estimated_days))
        .sum();
    let progress_percentage = if total_estimated > 0 {
        completed_estimated as f64 / total_estimated as f64 * 100.0
    } else {
        0.0
    };

    let mut score: i64 = 100;
    score -= (blocked_tasks as i64 * 5).min(30);
    score -= (overdue_tasks as i64 * 3).min(20);
    score -= (escalated_blockers as i64 * 10).min(25);

    if path.total_float < 0 {
        score -= 20;
    } else if path.total_float < 7 {
        score -= 10;
    }

    let health_score = score.clamp(0, 100) as u8;

    debug!(
        health_score,
        blocked_tasks, overdue_tasks, escalated_blockers, float = path.total_float,
        "project health computed"
    );

    ProjectHealth {
        total_tasks,
        completed_tasks,
        blocked_tasks,
        overdue_tasks,
        open_blockers,
        escalated_blockers,
        progress_percentage,
        schedule_float_days: path.total_float,
        risk_level: path.risk_level,
        health_score,
    }
}
