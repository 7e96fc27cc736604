//! Manifest parsing and validation
//!
//! This module handles loading devrun.yml manifests (and the built-in task
//! table) and validating the dependency graph they declare.

pub mod builtin;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use builtin::*;
pub use parse::*;
pub use schema::*;
pub use types::*;
