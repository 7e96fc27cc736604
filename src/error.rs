//! Error types for devrun

use std::io;
use thiserror::Error;

/// Result type alias for devrun operations
pub type Result<T> = std::result::Result<T, DevrunError>;

/// Main error type for devrun
#[derive(Error, Debug)]
pub enum DevrunError {
    /// Manifest loading and validation errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Action execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DevrunError {
    /// Process exit status for this error.
    ///
    /// A failing external tool surfaces its own exit code; everything else
    /// maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevrunError::Execution(ExecutionError::ActionFailed(code)) => *code,
            _ => 1,
        }
    }
}

/// Manifest loading and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to find manifest file (searched: {0})")]
    NotFound(String),

    #[error("Invalid manifest: {0}")]
    Invalid(String),

    #[error("Unknown task '{0}'")]
    TaskNotFound(String),

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("Circular dependency detected: {0}")]
    CircularDependency(String),
}

/// Action execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command exited with code {0}")]
    ActionFailed(i32),

    #[error("Command terminated by signal")]
    Terminated,

    #[error("Failed to launch command: {0}")]
    Spawn(#[from] io::Error),

    #[error("Invalid command template: {0}")]
    Template(String),
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Recursive interpolation detected in '{0}'")]
    Recursive(String),
}

/// Specialized result type for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;
