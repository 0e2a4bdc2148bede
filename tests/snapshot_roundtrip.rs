// tests/snapshot_roundtrip.rs
mod common;
use crate::common::builders::{SpecBuilder, TrackerBuilder};
use crate::common::init_tracing;

use std::error::Error;

use taskdag::model::{BlockerType, Priority, TaskStatus};
use taskdag::tracker::Tracker;

type TestResult = Result<(), Box<dyn Error>>;

fn populated_tracker() -> Result<Tracker, Box<dyn Error>> {
    let (mut tracker, ids) = TrackerBuilder::new()
        .task("a", SpecBuilder::new("alice", 5).priority(Priority::High))
        .task("b", SpecBuilder::new("bob", 3).after(&["a"]))
        .task("c", SpecBuilder::new("carol", 4).after(&["a", "b"]))
        .build();

    tracker.update_status(&ids["a"], TaskStatus::InProgress, Some(40.0), Some("going".into()))?;
    let blocker = tracker.add_blocker(
        &ids["b"],
        BlockerType::External,
        "vendor delay",
        "pushes schedule",
        Some("pm".to_string()),
    )?;
    tracker.escalate_blocker(&blocker)?;
    Ok(tracker)
}

#[test]
fn serialize_deserialize_serialize_is_byte_identical() -> TestResult {
    init_tracing();

    let tracker = populated_tracker()?;
    let first = tracker.to_json()?;
    let reloaded = Tracker::from_json(&first)?;
    let second = reloaded.to_json()?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn round_trip_preserves_state_and_order() -> TestResult {
    init_tracing();

    let tracker = populated_tracker()?;
    let reloaded = Tracker::from_json(&tracker.to_json()?)?;

    assert_eq!(tracker.to_snapshot(), reloaded.to_snapshot());

    // Creation order survives.
    let names: Vec<&str> = reloaded.tasks_in_order().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    // Mutable fields survive.
    let a = reloaded.tasks_in_order().next().unwrap();
    assert_eq!(a.status, TaskStatus::InProgress);
    assert_eq!(a.completion_percentage, 40.0);
    assert_eq!(a.notes, "going");
    assert!(a.start_date.is_some());

    let blocker = reloaded.blockers_in_order().next().unwrap();
    assert!(blocker.escalated);
    assert!(blocker.is_open());
    Ok(())
}

#[test]
fn adjacency_is_rebuilt_on_load() -> TestResult {
    init_tracing();

    let tracker = populated_tracker()?;
    let reloaded = Tracker::from_json(&tracker.to_json()?)?;

    let a_id = reloaded.tasks_in_order().next().unwrap().id.clone();
    let dependents = reloaded.graph().dependents_of(&a_id);
    assert_eq!(dependents.len(), 2);

    for task in reloaded.tasks_in_order() {
        assert_eq!(
            reloaded.graph().dependencies_of(&task.id),
            task.dependencies.as_slice()
        );
    }
    Ok(())
}

#[test]
fn reloaded_tracker_accepts_further_mutations() -> TestResult {
    init_tracing();

    let tracker = populated_tracker()?;
    let mut reloaded = Tracker::from_json(&tracker.to_json()?)?;

    let id = reloaded
        .add_task(taskdag::model::TaskSpec::new("next", "dave", 2))?;
    assert_eq!(reloaded.task_count(), 4);
    assert!(reloaded.get(&id).is_some());
    Ok(())
}

#[test]
fn file_round_trip_matches_in_memory() -> TestResult {
    init_tracing();

    let tracker = populated_tracker()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");

    tracker.save_to_file(&path)?;
    let reloaded = Tracker::load_from_file(&path)?;

    assert_eq!(tracker.to_snapshot(), reloaded.to_snapshot());
    Ok(())
}

#[test]
fn empty_tracker_round_trips() -> TestResult {
    init_tracing();

    let tracker = Tracker::new();
    let reloaded = Tracker::from_json(&tracker.to_json()?)?;
    assert_eq!(reloaded.task_count(), 0);
    assert_eq!(tracker.to_json()?, reloaded.to_json()?);
    Ok(())
}
