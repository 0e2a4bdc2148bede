// src/dag/graph.rs

use std::collections::HashMap;

use crate::model::TaskId;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct DepNode {
    /// Direct dependencies: tasks that must complete before this one starts.
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a dependency
    /// (the derived "blocks" relation).
    dependents: Vec<TaskId>,
}

/// In-memory adjacency index keyed by task id.
///
/// Tasks reference each other purely by identifier, so the graph carries
/// no ownership and no pointer cycles. Dangling dependency ids are kept
/// verbatim in `deps` (they surface as violations) but never get a node
/// of their own, so `dependents_of` only ever names existing tasks.
///
/// Invariant: B is in `dependencies_of(A)` and A exists iff A is in
/// `dependents_of(B)`. The tracker maintains this under its single
/// mutation path.
#[derive(Debug, Clone, Default)]
pub struct DepGraph {
    nodes: HashMap<TaskId, DepNode>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly created task and its dependency list.
    ///
    /// Dependents of every dependency that currently exists are updated;
    /// dependencies referencing unknown ids are recorded as-is.
    pub fn add_task(&mut self, id: TaskId, deps: Vec<TaskId>) {
        for dep in &deps {
            if let Some(dep_node) = self.nodes.get_mut(dep) {
                dep_node.dependents.push(id.clone());
            }
        }
        self.nodes.insert(id, DepNode {
            deps,
            dependents: Vec::new(),
        });
    }

    /// Rebuild the whole index from scratch, two-pass.
    ///
    /// Used when loading a snapshot, where the task list may contain
    /// forward or even cyclic references that the incremental
    /// [`DepGraph::add_task`] path cannot produce.
    pub fn rebuild<'a>(tasks: impl Iterator<Item = (&'a TaskId, &'a [TaskId])> + Clone) -> Self {
        let mut nodes: HashMap<TaskId, DepNode> = HashMap::new();

        for (id, deps) in tasks.clone() {
            nodes.insert(id.clone(), DepNode {
                deps: deps.to_vec(),
                dependents: Vec::new(),
            });
        }

        for (id, deps) in tasks {
            for dep in deps {
                if dep == id {
                    continue;
                }
                if let Some(dep_node) = nodes.get_mut(dep) {
                    dep_node.dependents.push(id.clone());
                }
            }
        }

        Self { nodes }
    }

    /// Immediate dependencies of a task (may include dangling ids).
    pub fn dependencies_of(&self, id: &TaskId) -> &[TaskId] {
        self.nodes.get(id).map(|n| n.deps.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a task, in the order they were created.
    pub fn dependents_of(&self, id: &TaskId) -> &[TaskId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the graph knows this task id.
    pub fn contains(&self, id: &TaskId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
