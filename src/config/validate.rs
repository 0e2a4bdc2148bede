// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{Result, TaskdagError};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = TaskdagError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.project, raw.task))
    }
}

fn validate_raw_plan(raw: &RawPlanFile) -> Result<()> {
    validate_project_section(raw)?;
    validate_task_estimates(raw)?;
    validate_task_references(raw)?;
    validate_plan_dag(raw)?;
    Ok(())
}

fn validate_project_section(raw: &RawPlanFile) -> Result<()> {
    if raw.project.window_days < 1 {
        return Err(TaskdagError::ConfigError(format!(
            "[project].window_days must be >= 1 (got {})",
            raw.project.window_days
        )));
    }
    Ok(())
}

fn validate_task_estimates(raw: &RawPlanFile) -> Result<()> {
    for (name, task) in raw.task.iter() {
        if task.days == 0 {
            return Err(TaskdagError::ConfigError(format!(
                "task '{name}' has days = 0; estimates must be positive"
            )));
        }
    }
    Ok(())
}

fn validate_task_references(raw: &RawPlanFile) -> Result<()> {
    for (name, task) in raw.task.iter() {
        for dep in task.after.iter() {
            if !raw.task.contains_key(dep) {
                return Err(TaskdagError::ConfigError(format!(
                    "task '{name}' has unknown dependency '{dep}' in `after`"
                )));
            }
            if dep == name {
                return Err(TaskdagError::ConfigError(format!(
                    "task '{name}' cannot depend on itself in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_plan_dag(raw: &RawPlanFile) -> Result<()> {
    // Edge direction: dep -> task. For:
    //   [task.B]
    //   after = ["A"]
    // we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in raw.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in raw.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    // A topological sort fails iff there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TaskdagError::PlanCycle(format!(
            "cycle detected in plan DAG involving task '{}'",
            cycle.node_id()
        ))),
    }
}
