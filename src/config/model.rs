// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::errors::Result;
use crate::model::{Priority, TaskId, TaskSpec};
use crate::tracker::Tracker;

/// Top-level configuration as read from `Taskdag.toml`, unvalidated.
///
/// ```toml
/// [project]
/// window_days = 112
/// state_file = "taskdag.json"
///
/// [task.schema_design]
/// agent = "database_architect"
/// days = 10
/// priority = "high"
/// deliverables = ["ERD", "migration scripts"]
///
/// [task.api_layer]
/// agent = "api_developer"
/// days = 8
/// after = ["schema_design"]
/// ```
///
/// All sections are optional; a config with no `[task.*]` sections is a
/// plain settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    /// Project-level settings from `[project]`.
    #[serde(default)]
    pub project: ProjectSection,

    /// Seed tasks from `[task.<name>]`, keyed by plan name.
    #[serde(default)]
    pub task: BTreeMap<String, PlanTask>,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Schedule horizon in days, used for float and risk computation.
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Where tracker state is persisted between CLI invocations.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

fn default_window_days() -> i64 {
    // 16 weeks.
    112
}

fn default_state_file() -> String {
    "taskdag.json".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            state_file: default_state_file(),
        }
    }
}

/// One `[task.<name>]` plan section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanTask {
    /// Owning agent identifier.
    pub agent: String,

    /// Estimated effort in whole days.
    pub days: u32,

    /// Scheduling priority; defaults to `medium`.
    #[serde(default)]
    pub priority: Priority,

    /// Plan names of tasks that must complete first.
    #[serde(default)]
    pub after: Vec<String>,

    #[serde(default)]
    pub deliverables: Vec<String>,

    #[serde(default)]
    pub success_criteria: Vec<String>,
}

/// A validated plan file.
///
/// Construct via `PlanFile::try_from(raw)` (see `validate.rs`), which
/// guarantees positive estimates, resolvable `after` references, and an
/// acyclic plan DAG.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub project: ProjectSection,
    pub task: BTreeMap<String, PlanTask>,
}

impl PlanFile {
    /// Internal constructor used after validation.
    pub(crate) fn new_unchecked(project: ProjectSection, task: BTreeMap<String, PlanTask>) -> Self {
        Self { project, task }
    }

    /// Create the plan's tasks in `tracker`, returning the plan-name to
    /// task-id mapping.
    ///
    /// Tasks are inserted in topological order (validation guarantees
    /// one exists) so that every `after` reference resolves to an
    /// already-created id and the dependents index forms completely.
    pub fn seed_tracker(&self, tracker: &mut Tracker) -> Result<BTreeMap<String, TaskId>> {
        let mut ids: BTreeMap<String, TaskId> = BTreeMap::new();

        for name in self.topo_order() {
            let Some(plan_task) = self.task.get(&name) else {
                continue;
            };

            let deps: Vec<TaskId> = plan_task
                .after
                .iter()
                .filter_map(|dep_name| ids.get(dep_name).cloned())
                .collect();

            let spec = TaskSpec {
                name: name.clone(),
                agent: plan_task.agent.clone(),
                estimated_days: plan_task.days,
                dependencies: deps,
                priority: plan_task.priority,
                deliverables: plan_task.deliverables.clone(),
                success_criteria: plan_task.success_criteria.clone(),
            };

            let id = tracker.add_task(spec)?;
            ids.insert(name, id);
        }

        info!(tasks = ids.len(), "plan imported into tracker");
        Ok(ids)
    }

    /// Plan names in dependency-first order.
    ///
    /// Kahn over the name graph; deterministic because names are drawn
    /// from a `BTreeMap`.
    fn topo_order(&self) -> Vec<String> {
        let mut in_degree: BTreeMap<&str, usize> = self
            .task
            .iter()
            .map(|(name, t)| (name.as_str(), t.after.len()))
            .collect();

        let mut dependents: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (name, t) in &self.task {
            for dep in &t.after {
                dependents
                    .entry(dep.as_str())
                    .or_default()
                    .push(name.as_str());
            }
        }

        let mut queue: std::collections::VecDeque<&str> = in_degree
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| *n)
            .collect();

        let mut order = Vec::with_capacity(self.task.len());
        while let Some(name) = queue.pop_front() {
            order.push(name.to_string());
            for next in dependents.get(name).into_iter().flatten() {
                if let Some(d) = in_degree.get_mut(next) {
                    *d -= 1;
                    if *d == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }

        order
    }
}
