//! Task record types shared by the scoring engine and storage.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task as seen by the scoring engine.
///
/// Immutable within one scoring pass. Dependencies reference other
/// tasks' titles (case-insensitive, trimmed), not stable identifiers;
/// an identifier matching no task in the batch is treated as an
/// external, unmet dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default = "default_unit")]
    pub importance: i64,
    #[serde(default = "default_unit")]
    pub estimated_hours: i64,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub done: bool,
}

fn default_unit() -> i64 {
    1
}

impl TaskRecord {
    /// Create a task with the default field values.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: None,
            importance: 1,
            estimated_hours: 1,
            dependencies: Vec::new(),
            done: false,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_estimated_hours(mut self, estimated_hours: i64) -> Self {
        self.estimated_hours = estimated_hours;
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// A task plus its computed priority score.
///
/// Scores are rounded to 3 decimal places, never negative, and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: TaskRecord,
    pub score: f64,
}

/// A task record as persisted in the store.
///
/// Stored tasks have no done flag; loading one yields a [`TaskRecord`]
/// with `done = false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub importance: i64,
    pub estimated_hours: i64,
    pub dependencies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl StoredTask {
    /// Build a fresh store record from a sanitized task.
    pub fn from_record(record: &TaskRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: record.title.clone(),
            due_date: record.due_date,
            importance: record.importance,
            estimated_hours: record.estimated_hours,
            dependencies: record.dependencies.clone(),
            created_at: Utc::now(),
        }
    }

    /// View the stored record as an input to the scoring engine.
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            title: self.title.clone(),
            due_date: self.due_date,
            importance: self.importance,
            estimated_hours: self.estimated_hours,
            dependencies: self.dependencies.clone(),
            done: false,
        }
    }
}
