//! Execution context for task running
//!
//! The context carries the state one invocation needs: the working
//! directory, interpolation variables, the interpreter, and verbosity.

use colored::Colorize;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Execution context for a single invocation
pub struct Context {
    /// Working directory actions run in
    pub working_dir: PathBuf,

    /// Manifest file path, if one was loaded from disk
    pub manifest_path: Option<PathBuf>,

    /// Interpolation variables (CLI overrides, forwarded args)
    pub vars: HashMap<String, String>,

    /// Interpreter argv prefix (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            manifest_path: None,
            vars: HashMap::new(),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the manifest file path
    pub fn with_manifest_path(mut self, path: PathBuf) -> Self {
        self.manifest_path = Some(path);
        self
    }

    /// Set interpolation variables
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars = vars;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set the verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set a single variable
    pub fn set_var(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    /// Get a variable value
    pub fn get_var(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }

    /// Announce a task beginning its action chain
    pub fn print_task_start(&self, task_name: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[TASK]".green().bold(), task_name);
        }
    }

    /// Echo a command about to run
    pub fn print_command(&self, line: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[RUN]".cyan().bold(), line);
        }
    }

    /// Report a suppressed non-fatal failure
    pub fn print_warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[WARN]".yellow().bold(), message);
        }
    }

    /// Print a debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
