//! Main CLI application

use crate::cli::help::render_help;
use crate::config::{load_manifest, parse_manifest_file, validate_manifest, Manifest};
use crate::error::Result;
use crate::runner::{Context, TaskRunner, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Binary name used for clap and completion output
const BIN_NAME: &str = "devrun";

/// Build the clap command
fn build_command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Development workflow tasks for python-source-builder")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to a devrun.yml manifest"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(clap::value_parser!(Shell))
                .help("Generate a shell completion script"),
        )
        .arg(
            Arg::new("task")
                .value_name("TASK")
                .help("Task to run (defaults to help)"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("KEY=VALUE overrides and arguments forwarded as ${args}"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Split trailing arguments into KEY=VALUE overrides and forwarded args.
///
/// Everything that is not an override lands in the `args` variable, joined
/// with spaces, so built-in actions like `pdm run pytest tests ${args}` can
/// forward it. The variable is always defined to keep the reference from
/// surviving interpolation verbatim.
fn parse_overrides(extra: &[String]) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    let mut forwarded = Vec::new();

    for token in extra {
        match token.split_once('=') {
            Some((key, value)) if is_var_name(key) => {
                vars.insert(key.to_string(), value.to_string());
            }
            _ => forwarded.push(token.clone()),
        }
    }

    vars.insert("args".to_string(), forwarded.join(" "));
    vars
}

fn is_var_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn load(matches: &ArgMatches) -> Result<(Manifest, Option<PathBuf>)> {
    match matches.get_one::<String>("file") {
        Some(path) => {
            let path = PathBuf::from(path);
            let manifest = parse_manifest_file(&path)?;
            Ok((manifest, Some(path)))
        }
        None => load_manifest(),
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();

    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        let mut cmd = build_command();
        generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
        return Ok(());
    }

    // Project-local environment, same as the tools we wrap expect
    let _ = dotenvy::dotenv();

    let (manifest, manifest_path) = load(&matches)?;
    validate_manifest(&manifest)?;

    let task_name = matches
        .get_one::<String>("task")
        .cloned()
        .unwrap_or_else(|| "help".to_string());

    if task_name == "help" {
        render_help(&manifest, &mut io::stdout())?;
        return Ok(());
    }

    let extra: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut ctx = Context::new()
        .with_verbosity(get_verbosity(&matches))
        .with_vars(parse_overrides(&extra));

    if let Some(path) = manifest_path {
        ctx = ctx.with_manifest_path(path);
    }
    if let Some(interpreter) = &manifest.interpreter {
        ctx = ctx.with_interpreter(interpreter.clone());
    }

    TaskRunner::new(&manifest).run(&task_name, &ctx)
}
