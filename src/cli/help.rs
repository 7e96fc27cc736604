//! Task listing
//!
//! The default action: prints the declared tasks with their one-line
//! descriptions, in declaration order. Tasks without a description are
//! internal and stay out of the listing.

use crate::config::Manifest;
use colored::Colorize;
use std::io::{self, Write};

/// Name and description of the built-in help action itself
const HELP_ENTRY: (&str, &str) = ("help", "Show this help");

/// Render the task listing for a manifest
pub fn render_help(manifest: &Manifest, out: &mut dyn Write) -> io::Result<()> {
    let name = manifest.name.as_deref().unwrap_or("devrun");

    if let Some(usage) = &manifest.usage {
        writeln!(out, "{}", usage)?;
        writeln!(out)?;
    }
    writeln!(out, "Usage: {} [OPTIONS] [TASK] [ARGS]...", name)?;
    writeln!(out)?;
    writeln!(out, "Tasks:")?;

    let width = manifest
        .tasks
        .iter()
        .filter(|t| t.description.is_some())
        .map(|t| t.name.len())
        .chain(std::iter::once(HELP_ENTRY.0.len()))
        .max()
        .unwrap_or(0);

    write_entry(out, HELP_ENTRY.0, HELP_ENTRY.1, width)?;
    for task in manifest.tasks.iter() {
        if let Some(description) = &task.description {
            write_entry(out, &task.name, description, width)?;
        }
    }

    Ok(())
}

fn write_entry(out: &mut dyn Write, name: &str, description: &str, width: usize) -> io::Result<()> {
    // Pad before colorizing; escape codes would throw the alignment off
    let padded = format!("{:width$}", name, width = width);
    writeln!(out, "  {}  {}", padded.bold(), description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_manifest_str;

    fn render(yaml: &str) -> String {
        let manifest = parse_manifest_str(yaml).unwrap();
        let mut buf = Vec::new();
        render_help(&manifest, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_described_tasks_are_listed() {
        let output = render(
            r#"
tasks:
  install:
    description: Install backend and frontend dependencies
    run: pdm install
  test:
    description: Run the test suite
    run: pdm run pytest tests
"#,
        );

        assert!(output.contains("install"));
        assert!(output.contains("Install backend and frontend dependencies"));
        assert!(output.contains("test"));
        assert!(output.contains("Run the test suite"));
    }

    #[test]
    fn test_undescribed_tasks_are_omitted() {
        let output = render(
            r#"
tasks:
  visible:
    description: A documented task
    run: echo visible
  internal-hook:
    run: echo hidden
"#,
        );

        assert!(output.contains("visible"));
        assert!(!output.contains("internal-hook"));
    }

    #[test]
    fn test_listing_follows_declaration_order() {
        let output = render(
            r#"
tasks:
  zebra:
    description: Last alphabetically, first declared
    run: echo z
  apple:
    description: First alphabetically, last declared
    run: echo a
"#,
        );

        let zebra = output.find("zebra").unwrap();
        let apple = output.find("apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_help_entry_always_present() {
        let output = render("tasks:\n");
        assert!(output.contains("help"));
        assert!(output.contains("Show this help"));
    }

    #[test]
    fn test_usage_line_uses_manifest_name() {
        let output = render(
            r#"
name: psb
usage: Workflow tasks
tasks:
"#,
        );

        assert!(output.contains("Usage: psb [OPTIONS] [TASK] [ARGS]..."));
        assert!(output.contains("Workflow tasks"));
    }
}
