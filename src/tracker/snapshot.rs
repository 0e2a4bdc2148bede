// src/tracker/snapshot.rs

//! Serialization boundary: the full tracker state as a structured document.
//!
//! A [`Snapshot`] holds every task and every blocker in creation order.
//! Round-tripping serialize -> deserialize -> serialize is byte-identical
//! because ordering is explicit and the derived adjacency is rebuilt on
//! load rather than stored.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dag::DepGraph;
use crate::errors::Result;
use crate::model::{Blocker, Task};
use crate::tracker::Tracker;

/// Serializable view of the full tracker state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tasks in creation order.
    pub tasks: Vec<Task>,
    /// Blockers in creation order.
    pub blockers: Vec<Blocker>,
}

impl Tracker {
    /// Capture the full state in creation order.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks_in_order().cloned().collect(),
            blockers: self.blockers_in_order().cloned().collect(),
        }
    }

    /// Restore a tracker from a snapshot.
    ///
    /// The adjacency index is derived from the dependency lists with a
    /// two-pass rebuild, so a snapshot that contains dangling or cyclic
    /// dependencies loads fine; such inconsistencies are surfaced by
    /// the violation detector, never rejected here.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let graph = DepGraph::rebuild(
            snapshot
                .tasks
                .iter()
                .map(|t| (&t.id, t.dependencies.as_slice())),
        );

        let task_order = snapshot.tasks.iter().map(|t| t.id.clone()).collect();
        let blocker_order = snapshot.blockers.iter().map(|b| b.id.clone()).collect();

        let tasks: HashMap<_, _> = snapshot
            .tasks
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();
        let blockers: HashMap<_, _> = snapshot
            .blockers
            .into_iter()
            .map(|b| (b.id.clone(), b))
            .collect();

        debug!(tasks = tasks.len(), blockers = blockers.len(), "tracker restored from snapshot");

        Self {
            tasks,
            task_order,
            blockers,
            blocker_order,
            graph,
        }
    }

    /// Serialize the state to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Deserialize a tracker from JSON produced by [`Tracker::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the state to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "tracker state saved");
        Ok(())
    }

    /// Load tracker state from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let tracker = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            tasks = tracker.task_count(),
            "tracker state loaded"
        );
        Ok(tracker)
    }
}
