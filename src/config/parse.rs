//! Manifest file discovery and parsing

use crate::config::builtin::builtin_manifest;
use crate::config::types::Manifest;
use crate::error::{ManifestError, ManifestResult, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file names to search for
const MANIFEST_FILE_NAMES: &[&str] = &["devrun.yml", "devrun.yaml"];

/// Find the manifest file by searching current and parent directories
pub fn find_manifest_file() -> ManifestResult<PathBuf> {
    let start = env::current_dir()
        .map_err(|e| ManifestError::Invalid(format!("Failed to get current directory: {}", e)))?;
    find_manifest_file_from(&start)
}

/// Find the manifest file starting from a specific directory
pub fn find_manifest_file_from(start_dir: &Path) -> ManifestResult<PathBuf> {
    let mut searched = Vec::new();

    for dir in start_dir.ancestors() {
        for file_name in MANIFEST_FILE_NAMES {
            let candidate = dir.join(file_name);
            if candidate.is_file() {
                return Ok(candidate);
            }
            searched.push(candidate.display().to_string());
        }
    }

    Err(ManifestError::NotFound(searched.join(", ")))
}

/// Parse a manifest file from a path
pub fn parse_manifest_file(path: &Path) -> Result<Manifest> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ManifestError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_manifest_str(&contents)
}

/// Parse a manifest from a YAML string
pub fn parse_manifest_str(yaml: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(yaml)?;
    Ok(manifest)
}

/// Load the project manifest with automatic discovery.
///
/// Falls back to the built-in task table when no devrun.yml exists, so the
/// standard workflow runs without any on-disk configuration. The returned
/// path is `None` for the built-in manifest.
pub fn load_manifest() -> Result<(Manifest, Option<PathBuf>)> {
    match find_manifest_file() {
        Ok(path) => {
            let manifest = parse_manifest_file(&path)?;
            Ok((manifest, Some(path)))
        }
        Err(ManifestError::NotFound(_)) => Ok((builtin_manifest()?, None)),
        Err(e) => Err(e.into()),
    }
}
