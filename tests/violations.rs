// tests/violations.rs
mod common;
use crate::common::builders::{spec, SpecBuilder, TrackerBuilder};
use crate::common::init_tracing;

use std::error::Error;

use taskdag::analysis::violations::{self, ViolationKind};
use taskdag::model::{Priority, Task, TaskId, TaskSpec, TaskStatus};
use taskdag::tracker::{Snapshot, Tracker};

type TestResult = Result<(), Box<dyn Error>>;

fn raw_task(id: &str, deps: Vec<TaskId>) -> Task {
    Task {
        id: TaskId::new(id),
        name: id.to_string(),
        agent: "agent".to_string(),
        status: TaskStatus::NotStarted,
        priority: Priority::Medium,
        estimated_days: 1,
        actual_days: 0,
        start_date: None,
        end_date: None,
        dependencies: deps,
        deliverables: Vec::new(),
        success_criteria: Vec::new(),
        completion_percentage: 0.0,
        notes: String::new(),
    }
}

#[test]
fn clean_graph_reports_nothing() -> TestResult {
    init_tracing();

    let (tracker, _) = TrackerBuilder::new()
        .task("a", SpecBuilder::new("alice", 2))
        .task("b", spec().after(&["a"]))
        .build();

    assert!(violations::detect(&tracker).is_empty());
    Ok(())
}

#[test]
fn dangling_dependency_is_a_missing_dependency_violation() -> TestResult {
    init_tracing();

    let mut tracker = Tracker::new();
    let id = tracker.add_task(
        TaskSpec::new("orphan", "alice", 2).dependency(TaskId::new("ghost")),
    )?;

    let found = violations::detect(&tracker);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::MissingDependency);
    assert_eq!(found[0].task_id, id);
    assert!(found[0].detail.contains("ghost"));
    Ok(())
}

#[test]
fn starting_before_a_dependency_completes_is_premature() -> TestResult {
    init_tracing();

    let (mut tracker, ids) = TrackerBuilder::new()
        .task("a", SpecBuilder::new("alice", 2))
        .task("b", spec().after(&["a"]))
        .build();

    tracker.update_status(&ids["b"], TaskStatus::InProgress, None, None)?;

    let found = violations::detect(&tracker);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::PrematureStart);
    assert_eq!(found[0].task_id, ids["b"]);

    // Completing the dependency clears the violation.
    tracker.update_status(&ids["a"], TaskStatus::Completed, None, None)?;
    assert!(violations::detect(&tracker).is_empty());
    Ok(())
}

#[test]
fn every_cycle_member_is_reported_once() -> TestResult {
    init_tracing();

    let tracker = Tracker::from_snapshot(Snapshot {
        tasks: vec![
            raw_task("a", vec![TaskId::new("b")]),
            raw_task("b", vec![TaskId::new("c")]),
            raw_task("c", vec![TaskId::new("a")]),
            raw_task("free", vec![]),
        ],
        blockers: Vec::new(),
    });

    let found = violations::detect(&tracker);
    let cyclic: Vec<_> = found
        .iter()
        .filter(|v| v.kind == ViolationKind::CircularDependency)
        .collect();

    assert_eq!(cyclic.len(), 3);
    for violation in &cyclic {
        assert!(violation.detail.starts_with("dependency cycle:"));
    }
    assert!(!found.iter().any(|v| v.task_id == TaskId::new("free")));
    Ok(())
}

#[test]
fn self_dependency_counts_as_a_cycle() -> TestResult {
    init_tracing();

    let tracker = Tracker::from_snapshot(Snapshot {
        tasks: vec![raw_task("loop", vec![TaskId::new("loop")])],
        blockers: Vec::new(),
    });

    let found = violations::detect(&tracker);
    let kinds: Vec<ViolationKind> = found.iter().map(|v| v.kind).collect();
    assert!(kinds.contains(&ViolationKind::CircularDependency));
    Ok(())
}
