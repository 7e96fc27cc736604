//! Devrun - the development task orchestrator for python-source-builder
//!
//! Devrun replaces the project's Makefile with a single binary: a fixed
//! graph of named tasks (install, lint, test, docs, ...) whose dependencies
//! resolve before their dependents, each task shelling out to the project
//! tooling with the fail-fast semantics of the original targets.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{DevrunError, Result};

/// Current version of devrun
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
