//! Manifest validation
//!
//! Structural checks that run once after parse: dependency references must
//! resolve, and the dependency relation must be acyclic.

use crate::config::types::{Manifest, TaskTable};
use crate::error::{ManifestError, ManifestResult};
use std::collections::HashSet;

/// Validate a complete manifest
pub fn validate_manifest(manifest: &Manifest) -> ManifestResult<()> {
    if let Some(interpreter) = &manifest.interpreter {
        if interpreter.is_empty() {
            return Err(ManifestError::Invalid(
                "interpreter must name a program".to_string(),
            ));
        }
    }

    // Every dependency must name a declared task
    for task in manifest.tasks.iter() {
        for dep in &task.dependencies {
            if !manifest.tasks.contains(dep) {
                return Err(ManifestError::UnknownDependency {
                    task: task.name.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }

    detect_cycles(&manifest.tasks)?;

    Ok(())
}

/// Reject cyclic dependency declarations before anything runs.
///
/// The diagnostic names the full cycle path, e.g. `a -> b -> a`.
fn detect_cycles(tasks: &TaskTable) -> ManifestResult<()> {
    let mut finished = HashSet::new();

    for task in tasks.iter() {
        let mut stack = Vec::new();
        visit(tasks, &task.name, &mut finished, &mut stack)?;
    }

    Ok(())
}

fn visit(
    tasks: &TaskTable,
    name: &str,
    finished: &mut HashSet<String>,
    stack: &mut Vec<String>,
) -> ManifestResult<()> {
    if stack.iter().any(|n| n == name) {
        stack.push(name.to_string());
        return Err(ManifestError::CircularDependency(stack.join(" -> ")));
    }

    if finished.contains(name) {
        return Ok(());
    }

    stack.push(name.to_string());

    if let Some(task) = tasks.get(name) {
        for dep in &task.dependencies {
            visit(tasks, dep, finished, stack)?;
        }
    }

    stack.pop();
    finished.insert(name.to_string());

    Ok(())
}
