//! Invocation driver
//!
//! Resolves the requested task against the manifest and walks the plan,
//! fail-fast: the first fatal action failure aborts the remaining actions
//! and every task after it. Non-fatal actions log their failure and let
//! the chain continue.

use crate::config::{Manifest, Task};
use crate::error::Result;
use crate::runner::command::execute_action;
use crate::runner::context::Context;
use crate::runner::resolve::resolution_order;

/// Executes tasks from a manifest
pub struct TaskRunner<'a> {
    manifest: &'a Manifest,
}

impl<'a> TaskRunner<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        TaskRunner { manifest }
    }

    /// Run a task and its transitive dependencies.
    ///
    /// Resolution happens up front, so an unknown name anywhere in the
    /// chain means zero actions execute.
    pub fn run(&self, task_name: &str, ctx: &Context) -> Result<()> {
        let plan = resolution_order(&self.manifest.tasks, task_name)?;

        for task in plan {
            self.execute_task(task, ctx)?;
        }

        Ok(())
    }

    fn execute_task(&self, task: &Task, ctx: &Context) -> Result<()> {
        ctx.print_task_start(&task.name);

        for action in &task.actions {
            match execute_action(action, ctx) {
                Ok(()) => {}
                Err(err) if !action.fatal => {
                    ctx.print_warning(&format!(
                        "ignoring failure in task '{}': {}",
                        task.name, err
                    ));
                }
                Err(err) => return Err(err.into()),
            }
        }

        ctx.print_debug(&format!("Task completed: {}", task.name));

        Ok(())
    }
}
