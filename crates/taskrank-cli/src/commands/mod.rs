//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod suggest;
pub mod task;

use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

/// Read the request body from a file, or stdin when no path is given.
pub(crate) fn read_input(input: Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse a request body: either `{ "tasks": [...], "save": bool }` or a
/// bare JSON array of tasks.
pub(crate) fn parse_tasks_body(
    raw: &str,
) -> Result<(Vec<Value>, bool), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Array(tasks) => Ok((tasks, false)),
        Value::Object(mut obj) => {
            let save = obj.get("save").and_then(Value::as_bool).unwrap_or(false);
            match obj.remove("tasks") {
                Some(Value::Array(tasks)) => Ok((tasks, save)),
                Some(_) => Err("'tasks' must be a list.".into()),
                None => Err("Missing 'tasks' in request body.".into()),
            }
        }
        _ => Err("Expected a JSON object with a 'tasks' list.".into()),
    }
}
