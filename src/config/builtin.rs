//! Built-in project task table
//!
//! The standard python-source-builder workflow ships inside the binary so
//! `devrun test` works anywhere in the project tree without an on-disk
//! manifest. A devrun.yml found by discovery takes precedence.

use crate::config::parse::parse_manifest_str;
use crate::config::types::Manifest;
use crate::error::Result;

/// YAML source of the built-in task table
pub const BUILTIN_MANIFEST: &str = include_str!("builtin.yml");

/// Parse the embedded task table
pub fn builtin_manifest() -> Result<Manifest> {
    parse_manifest_str(BUILTIN_MANIFEST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::validate_manifest;

    #[test]
    fn test_builtin_manifest_parses_and_validates() {
        let manifest = builtin_manifest().unwrap();
        validate_manifest(&manifest).unwrap();
    }

    #[test]
    fn test_builtin_manifest_declares_standard_tasks() {
        let manifest = builtin_manifest().unwrap();

        for name in [
            "install",
            "clean",
            "update",
            "export",
            "lint",
            "type-check",
            "test",
            "frontend",
            "serve",
            "applet",
            "docs-serve",
            "docs",
            "changelog",
        ] {
            let task = manifest.tasks.get(name).unwrap_or_else(|| {
                panic!("built-in manifest is missing task '{}'", name)
            });
            assert!(
                task.description.is_some(),
                "built-in task '{}' has no description",
                name
            );
        }
    }

    #[test]
    fn test_builtin_install_depends_on_clean() {
        let manifest = builtin_manifest().unwrap();
        let install = manifest.tasks.get("install").unwrap();
        assert_eq!(install.dependencies, vec!["clean".to_string()]);
    }

    #[test]
    fn test_builtin_lint_autofix_is_non_fatal() {
        let manifest = builtin_manifest().unwrap();
        let lint = manifest.tasks.get("lint").unwrap();

        // Only the auto-fix step may fail without aborting the chain
        assert!(!lint.actions[0].fatal);
        assert!(lint.actions[1..].iter().all(|a| a.fatal));
    }
}
