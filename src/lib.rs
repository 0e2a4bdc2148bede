// src/lib.rs

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod model;
pub mod tracker;

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::analysis::{health, readiness, report, violations, workload};
use crate::cli::{CliArgs, Command};
use crate::config::model::{PlanFile, ProjectSection};
use crate::dag::critical_path;
use crate::model::{BlockerId, TaskId, TaskSpec};
use crate::tracker::Tracker;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (optional `Taskdag.toml`)
/// - state load from the JSON snapshot file
/// - command dispatch against the tracker
/// - state save after mutating commands
pub fn run(args: CliArgs) -> Result<()> {
    let plan = load_plan(&args.config)?;

    let state_file = args
        .state
        .clone()
        .unwrap_or_else(|| plan.project.state_file.clone());
    let window_days = args.window_days.unwrap_or(plan.project.window_days);

    let mut tracker = load_state(&state_file)?;
    let now = Utc::now();

    match args.command {
        Command::Init => {
            tracker.save_to_file(&state_file)?;
            println!("taskdag initialized; state file: {state_file}");
        }

        Command::AddTask {
            name,
            agent,
            days,
            priority,
            after,
            deliverables,
            success_criteria,
        } => {
            let spec = TaskSpec {
                name: name.clone(),
                agent,
                estimated_days: days,
                dependencies: after.into_iter().map(TaskId::from).collect(),
                priority: priority.into(),
                deliverables,
                success_criteria,
            };
            let id = tracker.add_task(spec)?;
            tracker.save_to_file(&state_file)?;
            println!("added task {id}: {name}");
        }

        Command::UpdateTask {
            task_id,
            status,
            progress,
            notes,
        } => {
            let id = TaskId::from(task_id);
            tracker.update_status(&id, status.into(), progress, notes)?;
            tracker.save_to_file(&state_file)?;
            println!("updated task {id}");
            if let Some(task) = tracker.get(&id) {
                println!("  status: {:?}", task.status);
                println!("  progress: {:.1}%", task.completion_percentage);
            }
        }

        Command::AddBlocker {
            task_id,
            blocker_type,
            description,
            impact,
            assigned_to,
        } => {
            let id = TaskId::from(task_id);
            let blocker_id =
                tracker.add_blocker(&id, blocker_type.into(), description, impact, assigned_to)?;
            tracker.save_to_file(&state_file)?;
            println!("added blocker {blocker_id} to task {id}");
        }

        Command::ResolveBlocker { blocker_id, notes } => {
            let id = BlockerId::from(blocker_id);
            tracker.resolve_blocker(&id, notes)?;
            tracker.save_to_file(&state_file)?;
            println!("resolved blocker {id}");
        }

        Command::EscalateBlocker { blocker_id } => {
            let id = BlockerId::from(blocker_id);
            tracker.escalate_blocker(&id)?;
            tracker.save_to_file(&state_file)?;
            println!("escalated blocker {id}");
        }

        Command::Status => {
            let h = health::project_health(&tracker, window_days, now);
            println!("=== Project Status ===");
            println!("Health Score: {}/100", h.health_score);
            println!("Progress: {:.1}%", h.progress_percentage);
            println!("Tasks: {}/{} completed", h.completed_tasks, h.total_tasks);
            println!("Blocked: {} tasks", h.blocked_tasks);
            println!("Overdue: {} tasks", h.overdue_tasks);
            println!("Schedule Float: {} days", h.schedule_float_days);
            println!("Risk Level: {}", h.risk_level);
        }

        Command::CriticalPath => {
            let cp = critical_path::compute(&tracker, window_days);
            println!("=== Critical Path ===");
            println!("Duration: {} days", cp.total_duration);
            println!("Float: {} days", cp.total_float);
            println!("Risk: {}", cp.risk_level);
            println!("Path:");
            for (i, id) in cp.path.iter().enumerate() {
                if let Some(task) = tracker.get(id) {
                    println!(
                        "  {}. {} ({}) - {} days",
                        i + 1,
                        task.name,
                        task.agent,
                        task.estimated_days
                    );
                }
            }
            if !cp.bottlenecks.is_empty() {
                println!("Bottlenecks:");
                for id in &cp.bottlenecks {
                    if let Some(task) = tracker.get(id) {
                        println!("  - {} ({})", task.name, task.agent);
                    }
                }
            }
        }

        Command::ReadyTasks => {
            let ready = readiness::ready_tasks(&tracker);
            if ready.is_empty() {
                println!("No tasks ready to start.");
            } else {
                println!("=== Ready Tasks ===");
                for id in &ready {
                    if let Some(task) = tracker.get(id) {
                        println!(
                            "- {} ({}) - {} days",
                            task.name, task.agent, task.estimated_days
                        );
                    }
                }
            }
        }

        Command::BlockedTasks => {
            let blocked = readiness::blocked_tasks(&tracker);
            if blocked.is_empty() {
                println!("No tasks currently blocked.");
            } else {
                println!("=== Blocked Tasks ===");
                for (id, descriptions) in &blocked {
                    if let Some(task) = tracker.get(id) {
                        println!("- {} ({})", task.name, task.agent);
                        for description in descriptions {
                            println!("  * {description}");
                        }
                    }
                }
            }
        }

        Command::OverdueTasks => {
            let overdue = readiness::overdue_tasks(&tracker, now);
            if overdue.is_empty() {
                println!("No overdue tasks.");
            } else {
                println!("=== Overdue Tasks ===");
                for id in &overdue {
                    if let Some(task) = tracker.get(id) {
                        println!(
                            "- {} ({}) - estimated {} days",
                            task.name, task.agent, task.estimated_days
                        );
                    }
                }
            }
        }

        Command::Workload => {
            println!("=== Agent Workload ===");
            for (agent, load) in workload::agent_workload(&tracker) {
                println!("{agent}:");
                println!("  Active: {} tasks", load.in_progress);
                println!("  Blocked: {} tasks", load.blocked);
                println!("  Completed: {} tasks", load.completed);
                println!("  Remaining: {:.1} days", load.remaining_days);
            }
        }

        Command::Violations => {
            let found = violations::detect(&tracker);
            if found.is_empty() {
                println!("No dependency violations.");
            } else {
                println!("=== Dependency Violations ===");
                for v in &found {
                    println!("- {} [{:?}]: {}", v.task_name, v.kind, v.detail);
                }
            }
        }

        Command::ImportPlan => {
            let ids = plan.seed_tracker(&mut tracker)?;
            tracker.save_to_file(&state_file)?;
            println!("imported {} tasks from plan:", ids.len());
            for (name, id) in &ids {
                println!("  {name} -> {id}");
            }
        }

        Command::Export { output } => {
            let report = report::status_report(&tracker, window_days, now);
            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("status report exported to {path}");
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

/// Load the plan/config file, falling back to defaults when absent.
fn load_plan(path: &str) -> Result<PlanFile> {
    if Path::new(path).exists() {
        debug!(path, "loading config");
        Ok(config::loader::load_and_validate(path)?)
    } else {
        debug!(path, "no config file; using defaults");
        Ok(PlanFile {
            project: ProjectSection::default(),
            task: Default::default(),
        })
    }
}

/// Load tracker state, starting fresh if the state file does not exist.
fn load_state(path: &str) -> Result<Tracker> {
    if Path::new(path).exists() {
        Ok(Tracker::load_from_file(path)?)
    } else {
        info!(path, "no state file; starting with an empty tracker");
        Ok(Tracker::new())
    }
}
