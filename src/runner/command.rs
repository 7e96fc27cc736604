//! Action execution
//!
//! Runs one action through the interpreter with inherited stdio and maps
//! the exit status into the execution error taxonomy.

use crate::config::Action;
use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::context::Context;
use crate::runner::interpolate::interpolate;
use std::process::{Command, Stdio};

/// Execute a single action in the given context.
///
/// The command string is interpolated, echoed (unless the action or the
/// verbosity says otherwise), and handed to the interpreter in the
/// invocation's working directory. A non-zero exit surfaces as
/// [`ExecutionError::ActionFailed`] carrying the tool's exit code.
pub fn execute_action(action: &Action, ctx: &Context) -> ExecutionResult<()> {
    let command_line = interpolate(&action.command, &ctx.vars)
        .map_err(|e| ExecutionError::Template(e.to_string()))?;

    if !action.quiet {
        ctx.print_command(&command_line);
    }

    let working_dir = match &action.dir {
        Some(dir) => {
            let dir = interpolate(dir, &ctx.vars)
                .map_err(|e| ExecutionError::Template(e.to_string()))?;
            ctx.working_dir.join(dir)
        }
        None => ctx.working_dir.clone(),
    };

    let mut command = Command::new(&ctx.interpreter[0]);
    command.args(&ctx.interpreter[1..]);
    command.arg(&command_line);
    command.current_dir(&working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    // Overrides are visible to the tool as well as to interpolation
    for (key, value) in &ctx.vars {
        command.env(key, value);
    }

    let status = command.status()?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(ExecutionError::ActionFailed(code)),
        None => Err(ExecutionError::Terminated),
    }
}
