//! Batch intake: coercing raw JSON task objects into task records.
//!
//! One normalization routine with two explicit modes, so the strict
//! (analyze) and lenient (suggest) entry points cannot drift apart.
//! Per-field defaulting is never an error; only invalid due dates and
//! non-object entries differ between the modes.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::task::TaskRecord;

/// How intake treats entries it cannot fully validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Invalid due dates and non-object entries are collected as
    /// messages; any message rejects the whole batch.
    Strict,
    /// Invalid due dates are silently nulled and non-object entries
    /// skipped.
    Lenient,
}

/// Normalize a raw batch into task records.
///
/// Field coercion, applied in both modes:
/// - missing/blank `title` becomes `"Untitled <position>"` (1-based)
/// - `importance`/`estimated_hours` accept integers, floats (truncated)
///   and numeric strings; anything else falls back to 1
/// - `dependencies` accepts an array (elements stringified) or a single
///   string; any other shape becomes an empty list
/// - `done` must be a JSON boolean, else false
/// - `due_date` must be an ISO `YYYY-MM-DD` string or null
pub fn sanitize_batch(raw: &[Value], mode: ValidationMode) -> Result<Vec<TaskRecord>> {
    let mut records = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for (index, value) in raw.iter().enumerate() {
        let Some(obj) = value.as_object() else {
            if mode == ValidationMode::Strict {
                errors.push(format!("Task at index {index} is not an object."));
            }
            continue;
        };

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Untitled {}", index + 1));

        let due_date = match obj.get("due_date") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => match parse_due_date(value) {
                Some(date) => Some(date),
                None => {
                    if mode == ValidationMode::Strict {
                        errors.push(format!(
                            "Task '{title}': invalid due_date '{}', expected YYYY-MM-DD.",
                            display_value(value)
                        ));
                    }
                    None
                }
            },
        };

        records.push(TaskRecord {
            title,
            due_date,
            importance: coerce_int(obj.get("importance")).unwrap_or(1),
            estimated_hours: coerce_int(obj.get("estimated_hours")).unwrap_or(1),
            dependencies: coerce_dependencies(obj.get("dependencies")),
            done: obj.get("done").and_then(Value::as_bool).unwrap_or(false),
        });
    }

    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }
    Ok(records)
}

fn parse_due_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn coerce_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_dependencies(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(dependency_name).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn dependency_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
