//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a devrun.yml manifest
pub fn write_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("devrun.yml");
    fs::write(&manifest_path, content).unwrap();
    (temp_dir, manifest_path)
}

/// Read a trace file written by test actions, empty if nothing ran
pub fn read_trace(temp_dir: &TempDir, name: &str) -> String {
    fs::read_to_string(temp_dir.path().join(name)).unwrap_or_default()
}
