//! Variable interpolation for command strings
//!
//! Replaces `${var}` references from the invocation's variables, falling
//! back to the process environment. Unknown variables stay verbatim so
//! shell-level `${...}` constructs pass through untouched.

use crate::error::{InterpolationError, InterpolationResult};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

/// Rounds of re-expansion allowed before declaring a reference cycle
const MAX_DEPTH: usize = 32;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap())
}

/// Interpolate `${var}` references in a string.
///
/// Lookup order: invocation variables, then the process environment.
/// Values may themselves contain references; expansion repeats until the
/// string is stable.
pub fn interpolate(input: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    let mut current = input.to_string();

    for _ in 0..MAX_DEPTH {
        let mut replaced = false;

        current = var_pattern()
            .replace_all(&current, |caps: &Captures| {
                let key = &caps[1];

                if let Some(value) = vars.get(key) {
                    replaced = true;
                    return value.clone();
                }
                if let Ok(value) = env::var(key) {
                    replaced = true;
                    return value;
                }

                caps[0].to_string()
            })
            .into_owned();

        if !replaced {
            return Ok(current);
        }
    }

    Err(InterpolationError::Recursive(input.to_string()))
}
