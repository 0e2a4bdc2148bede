// src/analysis/violations.rs

//! Dependency violation detection.
//!
//! Violations are data, not errors: the tracker deliberately tolerates
//! an inconsistent graph (a dependency can legitimately be recorded
//! before its target exists) and surfaces the inconsistency through
//! this query instead of failing any operation.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{TaskId, TaskStatus};
use crate::tracker::Tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A dependency id that does not exist in the task store.
    MissingDependency,
    /// The task participates in a dependency cycle.
    CircularDependency,
    /// The task is in progress while a dependency is not completed.
    PrematureStart,
}

/// One detected inconsistency in the task graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub task_id: TaskId,
    pub task_name: String,
    pub kind: ViolationKind,
    pub detail: String,
}

/// Scan the graph for missing dependencies, cycles, and premature starts.
pub fn detect(tracker: &Tracker) -> Vec<Violation> {
    let mut violations = Vec::new();

    for task in tracker.tasks_in_order() {
        for dep_id in &task.dependencies {
            match tracker.get(dep_id) {
                None => violations.push(Violation {
                    task_id: task.id.clone(),
                    task_name: task.name.clone(),
                    kind: ViolationKind::MissingDependency,
                    detail: format!("dependency {dep_id} not found"),
                }),
                Some(dep) => {
                    if task.status == TaskStatus::InProgress
                        && dep.status != TaskStatus::Completed
                    {
                        violations.push(Violation {
                            task_id: task.id.clone(),
                            task_name: task.name.clone(),
                            kind: ViolationKind::PrematureStart,
                            detail: format!("started before dependency {dep_id} completed"),
                        });
                    }
                }
            }
        }
    }

    violations.extend(cycle_violations(tracker));

    debug!(count = violations.len(), "violations detected");
    violations
}

/// Full cycle detection via strongly connected components.
///
/// Every task in a cycle is reported once, with the cycle's member
/// names in the detail. Dangling dependency ids never form nodes, so
/// they cannot fabricate cycles.
fn cycle_violations(tracker: &Tracker) -> Vec<Violation> {
    let mut graph: DiGraph<&TaskId, ()> = DiGraph::new();
    let mut indices = HashMap::new();

    for task in tracker.tasks_in_order() {
        indices.insert(&task.id, graph.add_node(&task.id));
    }

    let mut self_loops: HashSet<&TaskId> = HashSet::new();
    for task in tracker.tasks_in_order() {
        for dep in &task.dependencies {
            if dep == &task.id {
                self_loops.insert(&task.id);
                continue;
            }
            if let Some(&dep_ix) = indices.get(dep) {
                graph.add_edge(dep_ix, indices[&task.id], ());
            }
        }
    }

    let mut violations = Vec::new();

    for scc in tarjan_scc(&graph) {
        let in_cycle = scc.len() > 1 || self_loops.contains(graph[scc[0]]);
        if !in_cycle {
            continue;
        }

        let member_names: Vec<&str> = scc
            .iter()
            .filter_map(|ix| tracker.get(graph[*ix]))
            .map(|t| t.name.as_str())
            .collect();

        for ix in &scc {
            if let Some(task) = tracker.get(graph[*ix]) {
                violations.push(Violation {
                    task_id: task.id.clone(),
                    task_name: task.name.clone(),
                    kind: ViolationKind::CircularDependency,
                    detail: format!("dependency cycle: {}", member_names.join(" <-> ")),
                });
            }
        }
    }

    violations
}
