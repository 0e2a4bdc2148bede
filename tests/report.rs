// tests/report.rs
mod common;
use crate::common::builders::{SpecBuilder, TrackerBuilder};
use crate::common::init_tracing;

use std::error::Error;

use chrono::Utc;
use taskdag::analysis::report::{self, StatusReport};
use taskdag::model::{BlockerType, TaskStatus};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn report_sections_agree_with_their_sources() -> TestResult {
    init_tracing();

    let (mut tracker, ids) = TrackerBuilder::new()
        .task("a", SpecBuilder::new("alice", 5))
        .task("b", SpecBuilder::new("bob", 3).after(&["a"]))
        .build();

    tracker.update_status(&ids["a"], TaskStatus::Completed, None, None)?;
    tracker.add_blocker(&ids["b"], BlockerType::External, "review stuck", "delays b", None)?;

    let now = Utc::now();
    let report = report::status_report(&tracker, 112, now);

    assert_eq!(report.report_date, now);
    assert_eq!(report.project_health.total_tasks, 2);
    assert_eq!(report.project_health.completed_tasks, 1);
    assert_eq!(report.critical_path.total_duration, 8);
    assert!(report.ready_tasks.is_empty());
    assert_eq!(report.blocked_tasks.len(), 1);
    assert_eq!(report.blocked_tasks[0].0, ids["b"]);
    assert!(report.violations.is_empty());
    assert_eq!(report.agent_workload.len(), 2);
    assert_eq!(report.state, tracker.to_snapshot());
    Ok(())
}

#[test]
fn report_round_trips_through_json() -> TestResult {
    init_tracing();

    let (mut tracker, ids) = TrackerBuilder::new()
        .task("a", SpecBuilder::new("alice", 2))
        .task("b", SpecBuilder::new("bob", 4).after(&["a"]))
        .build();
    tracker.update_status(&ids["a"], TaskStatus::InProgress, Some(20.0), None)?;

    let report = report::status_report(&tracker, 30, Utc::now());
    let json = serde_json::to_string_pretty(&report)?;
    let parsed: StatusReport = serde_json::from_str(&json)?;

    assert_eq!(parsed, report);
    Ok(())
}
