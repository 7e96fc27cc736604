//! Manifest data model
//!
//! This module defines the data structures that represent a devrun.yml
//! manifest file: the declaration-ordered task table, tasks, and actions.

use serde::Deserialize;

/// Top-level manifest structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project name (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// One-line project usage description (optional)
    #[serde(default)]
    pub usage: Option<String>,

    /// Interpreter argv prefix for actions (e.g., ["bash", "-c"])
    #[serde(default)]
    pub interpreter: Option<Vec<String>>,

    /// Tasks in declaration order
    #[serde(default, deserialize_with = "deserialize_tasks")]
    pub tasks: TaskTable,
}

/// Declaration-ordered collection of tasks, keyed by name
///
/// Help output and dependency tie-breaks follow declaration order, so a
/// plain `HashMap` won't do here.
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    entries: Vec<Task>,
}

impl TaskTable {
    /// Look up a task by name
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.entries.iter().find(|t| t.name == name)
    }

    /// Check whether a task with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate tasks in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.entries.iter()
    }

    /// Number of declared tasks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a task, replacing any earlier declaration with the same name
    pub fn push(&mut self, task: Task) {
        if let Some(existing) = self.entries.iter_mut().find(|t| t.name == task.name) {
            *existing = task;
        } else {
            self.entries.push(task);
        }
    }
}

impl<'a> IntoIterator for &'a TaskTable {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A named task in the graph
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique task name
    pub name: String,

    /// One-line help description; tasks without one are hidden from help
    pub description: Option<String>,

    /// Names of tasks that must complete successfully before this one
    pub dependencies: Vec<String>,

    /// External commands to run, in order
    pub actions: Vec<Action>,
}

impl Task {
    fn from_spec(name: String, spec: TaskSpec) -> Self {
        Task {
            name,
            description: spec.description,
            dependencies: spec.deps,
            actions: spec.run,
        }
    }
}

/// Task body as written in the manifest (the name comes from the mapping key)
#[derive(Debug, Clone, Default, Deserialize)]
struct TaskSpec {
    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    deps: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_actions")]
    run: Vec<Action>,
}

/// One external command invocation belonging to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Command line, run through the interpreter
    pub command: String,

    /// Working directory, relative to the invocation directory
    pub dir: Option<String>,

    /// Suppress the command echo
    pub quiet: bool,

    /// Whether a failure aborts the remaining chain
    pub fatal: bool,
}

impl Action {
    /// A plain fatal shell action
    pub fn shell(command: impl Into<String>) -> Self {
        Action {
            command: command.into(),
            dir: None,
            quiet: false,
            fatal: true,
        }
    }

    /// Parse the string shorthand: a leading `-` demotes exactly this
    /// action to non-fatal, as in make recipes.
    fn from_shorthand(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(rest) => Action {
                command: rest.trim_start().to_string(),
                dir: None,
                quiet: false,
                fatal: false,
            },
            None => Action::shell(raw),
        }
    }

    fn from_detail(detail: ActionDetail) -> Self {
        Action {
            command: detail.exec,
            dir: detail.dir,
            quiet: detail.quiet,
            fatal: !detail.allow_failure,
        }
    }
}

/// Detailed action specification
#[derive(Debug, Clone, Deserialize)]
struct ActionDetail {
    /// The command to execute
    exec: String,

    /// Working directory for the command
    #[serde(default)]
    dir: Option<String>,

    /// Whether to suppress the command echo
    #[serde(default)]
    quiet: bool,

    /// Demote this action to non-fatal
    #[serde(default, rename = "allow-failure")]
    allow_failure: bool,
}

/// Custom deserializer for the task mapping that preserves declaration order
fn deserialize_tasks<'de, D>(deserializer: D) -> Result<TaskTable, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::Null => Ok(TaskTable::default()),
        Value::Mapping(mapping) => {
            let mut table = TaskTable::default();
            for (key, body) in mapping {
                let name = key
                    .as_str()
                    .ok_or_else(|| D::Error::custom("task names must be strings"))?
                    .to_string();
                // A bare `name:` declares an empty task
                let spec = match body {
                    Value::Null => TaskSpec::default(),
                    body => TaskSpec::deserialize(body).map_err(D::Error::custom)?,
                };
                table.push(Task::from_spec(name, spec));
            }
            Ok(table)
        }
        _ => Err(D::Error::custom("tasks must be a mapping")),
    }
}

/// Custom deserializer for actions that handles both single values and arrays
fn deserialize_actions<'de, D>(deserializer: D) -> Result<Vec<Action>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single string command
        Value::String(s) => Ok(vec![Action::from_shorthand(&s)]),
        // Single detailed command
        Value::Mapping(_) => {
            let detail = ActionDetail::deserialize(value).map_err(D::Error::custom)?;
            Ok(vec![Action::from_detail(detail)])
        }
        // Array of commands
        Value::Sequence(seq) => {
            let mut actions = Vec::new();
            for item in seq {
                let action = match item {
                    Value::String(s) => Action::from_shorthand(&s),
                    Value::Mapping(_) => Action::from_detail(
                        ActionDetail::deserialize(item).map_err(D::Error::custom)?,
                    ),
                    _ => return Err(D::Error::custom("run entries must be strings or mappings")),
                };
                actions.push(action);
            }
            Ok(actions)
        }
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string, mapping, or array")),
    }
}
