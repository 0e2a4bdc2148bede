#![allow(dead_code)]

use std::collections::BTreeMap;

use taskdag::model::{Priority, TaskId, TaskSpec};
use taskdag::tracker::Tracker;

/// Builder that assembles a [`Tracker`] from named task specs.
///
/// Dependencies are given by *key* rather than id, so tests can write
/// `.task("d", spec().after(&["b", "c"]))` and get the id wiring for
/// free. Keys must be added dependency-first (ids only exist once the
/// dependency's task has been created).
pub struct TrackerBuilder {
    tracker: Tracker,
    ids: BTreeMap<String, TaskId>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self {
            tracker: Tracker::new(),
            ids: BTreeMap::new(),
        }
    }

    /// Add a task under a short key used by later `after` references.
    pub fn task(mut self, key: &str, spec: SpecBuilder) -> Self {
        let deps: Vec<TaskId> = spec
            .after
            .iter()
            .map(|dep_key| {
                self.ids
                    .get(dep_key)
                    .cloned()
                    .unwrap_or_else(|| panic!("unknown dependency key '{dep_key}'"))
            })
            .collect();

        let task_spec = TaskSpec::new(key, spec.agent, spec.days)
            .priority(spec.priority)
            .dependencies(deps);

        let id = self
            .tracker
            .add_task(task_spec)
            .expect("builder specs are valid");
        self.ids.insert(key.to_string(), id);
        self
    }

    pub fn build(self) -> (Tracker, BTreeMap<String, TaskId>) {
        (self.tracker, self.ids)
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one task's creation parameters.
#[derive(Debug, Clone)]
pub struct SpecBuilder {
    agent: String,
    days: u32,
    priority: Priority,
    after: Vec<String>,
}

/// Shorthand for a one-day medium-priority task owned by "agent".
pub fn spec() -> SpecBuilder {
    SpecBuilder::new("agent", 1)
}

impl SpecBuilder {
    pub fn new(agent: &str, days: u32) -> Self {
        Self {
            agent: agent.to_string(),
            days,
            priority: Priority::Medium,
            after: Vec::new(),
        }
    }

    pub fn agent(mut self, agent: &str) -> Self {
        self.agent = agent.to_string();
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn after(mut self, keys: &[&str]) -> Self {
        self.after.extend(keys.iter().map(|k| k.to_string()));
        self
    }
}
