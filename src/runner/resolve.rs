//! Dependency resolution
//!
//! Expands a requested task into the linear execution order: dependencies
//! before dependents, declared order among siblings, each task scheduled at
//! most once per invocation.

use crate::config::{Task, TaskTable};
use crate::error::{ManifestError, ManifestResult};
use std::collections::HashSet;

/// Produce the execution order for a requested task.
///
/// Fails with an unknown-task error before anything runs if the requested
/// name (or any transitive dependency) is not declared. Cycles are already
/// rejected at manifest load; the stack guard here keeps the resolver safe
/// when used on an unvalidated table.
pub fn resolution_order<'a>(tasks: &'a TaskTable, target: &str) -> ManifestResult<Vec<&'a Task>> {
    let mut order = Vec::new();
    let mut scheduled = HashSet::new();
    let mut stack = Vec::new();

    schedule(tasks, target, &mut scheduled, &mut stack, &mut order)?;

    Ok(order)
}

fn schedule<'a>(
    tasks: &'a TaskTable,
    name: &str,
    scheduled: &mut HashSet<String>,
    stack: &mut Vec<String>,
    order: &mut Vec<&'a Task>,
) -> ManifestResult<()> {
    if scheduled.contains(name) {
        return Ok(());
    }

    if stack.iter().any(|n| n == name) {
        stack.push(name.to_string());
        return Err(ManifestError::CircularDependency(stack.join(" -> ")));
    }

    let task = tasks
        .get(name)
        .ok_or_else(|| ManifestError::TaskNotFound(name.to_string()))?;

    stack.push(name.to_string());

    for dep in &task.dependencies {
        schedule(tasks, dep, scheduled, stack, order)?;
    }

    stack.pop();
    scheduled.insert(name.to_string());
    order.push(task);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_manifest_str;

    fn names(order: &[&Task]) -> Vec<String> {
        order.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_task_without_dependencies_resolves_to_itself() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  test:
    run: pdm run pytest tests
"#,
        )
        .unwrap();

        let order = resolution_order(&manifest.tasks, "test").unwrap();
        assert_eq!(names(&order), vec!["test"]);
    }

    #[test]
    fn test_dependency_runs_before_dependent() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  clean:
    run: rm -rf .venv
  install:
    deps: [clean]
    run: pdm install
"#,
        )
        .unwrap();

        let order = resolution_order(&manifest.tasks, "install").unwrap();
        assert_eq!(names(&order), vec!["clean", "install"]);
    }

    #[test]
    fn test_transitive_chain() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  a:
  b:
    deps: [a]
  c:
    deps: [b]
"#,
        )
        .unwrap();

        let order = resolution_order(&manifest.tasks, "c").unwrap();
        assert_eq!(names(&order), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shared_dependency_scheduled_once() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  base:
  left:
    deps: [base]
  right:
    deps: [base]
  top:
    deps: [left, right]
"#,
        )
        .unwrap();

        let order = resolution_order(&manifest.tasks, "top").unwrap();
        assert_eq!(names(&order), vec!["base", "left", "right", "top"]);
    }

    #[test]
    fn test_sibling_dependencies_keep_declared_order() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  first:
  second:
  both:
    deps: [second, first]
"#,
        )
        .unwrap();

        let order = resolution_order(&manifest.tasks, "both").unwrap();
        assert_eq!(names(&order), vec!["second", "first", "both"]);
    }

    #[test]
    fn test_unknown_task_is_an_error() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  test:
    run: pdm run pytest tests
"#,
        )
        .unwrap();

        let result = resolution_order(&manifest.tasks, "deploy");
        assert!(matches!(result, Err(ManifestError::TaskNotFound(_))));
    }

    #[test]
    fn test_unknown_dependency_is_an_error() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  install:
    deps: [missing]
    run: pdm install
"#,
        )
        .unwrap();

        let result = resolution_order(&manifest.tasks, "install");
        assert!(matches!(result, Err(ManifestError::TaskNotFound(_))));
    }

    #[test]
    fn test_cycle_guard_on_unvalidated_table() {
        let manifest = parse_manifest_str(
            r#"
tasks:
  a:
    deps: [b]
  b:
    deps: [a]
"#,
        )
        .unwrap();

        let result = resolution_order(&manifest.tasks, "a");
        assert!(matches!(result, Err(ManifestError::CircularDependency(_))));
    }
}
