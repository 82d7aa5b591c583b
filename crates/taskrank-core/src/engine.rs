//! Analyze and suggest operations over the scoring engine.
//!
//! The engine ties the intake, scorer, explainer and store together:
//! *analyze* scores a strict-validated batch (optionally persisting the
//! sanitized records), *suggest* returns the top tasks with a textual
//! rationale, falling back to recently stored tasks when no batch is
//! supplied.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::explain::build_explanation;
use crate::intake::{sanitize_batch, ValidationMode};
use crate::scoring::{analyze_tasks, ScoreWeights, ScoringConfig};
use crate::storage::{Config, TaskDb};
use crate::task::{ScoredTask, StoredTask};

/// Top suggestions plus the textual rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestions: Vec<ScoredTask>,
    pub explanation: String,
}

/// Engine owning the task store and scoring configuration.
pub struct Engine {
    db: TaskDb,
    weights: ScoreWeights,
    top_n: usize,
    store_limit: u32,
    fixed_today: Option<NaiveDate>,
}

impl Engine {
    /// Create an engine over the user store and configuration.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self {
            db: TaskDb::open()?,
            weights: config.weights,
            top_n: config.suggest.top_n,
            store_limit: config.suggest.store_limit,
            fixed_today: None,
        })
    }

    /// Create an engine with an in-memory store and a fixed date (for tests).
    #[cfg(test)]
    fn in_memory(today: NaiveDate) -> Result<Self> {
        let config = Config::default();
        Ok(Self {
            db: TaskDb::open_memory()?,
            weights: config.weights,
            top_n: config.suggest.top_n,
            store_limit: config.suggest.store_limit,
            fixed_today: Some(today),
        })
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Score a raw batch with strict validation and return every task in
    /// priority order.
    ///
    /// Any invalid due date aborts the whole call with all collected
    /// messages. With `save`, each sanitized (unscored) record is
    /// persisted best-effort: a failed insert is skipped and neither
    /// aborts the remaining saves nor affects the returned results.
    pub fn analyze(&self, raw: &[Value], save: bool) -> Result<Vec<ScoredTask>> {
        let records = sanitize_batch(raw, ValidationMode::Strict)?;
        let config = ScoringConfig::with_weights(self.today(), self.weights.clone());
        let scored = analyze_tasks(&records, &config);

        if save {
            for record in &records {
                // best-effort: a record that fails to insert is skipped
                let _ = self.db.create_task(&StoredTask::from_record(record));
            }
        }

        Ok(scored)
    }

    /// Suggest the next best tasks.
    ///
    /// A non-empty explicit batch is sanitized leniently; otherwise the
    /// most recently stored tasks (up to the configured limit, done
    /// assumed false) are used. Fails with [`CoreError::NoTasks`] when
    /// neither source yields any task.
    pub fn suggest(&self, raw: Option<&[Value]>) -> Result<Suggestion> {
        let records = match raw {
            Some(batch) if !batch.is_empty() => sanitize_batch(batch, ValidationMode::Lenient)?,
            _ => self
                .db
                .list_recent(self.store_limit)?
                .iter()
                .map(StoredTask::to_record)
                .collect(),
        };
        if records.is_empty() {
            return Err(CoreError::NoTasks);
        }

        let today = self.today();
        let config = ScoringConfig::with_weights(today, self.weights.clone());
        let scored = analyze_tasks(&records, &config);

        let top: Vec<ScoredTask> = scored.into_iter().take(self.top_n).collect();
        let explanation = build_explanation(&top, today, &self.weights);
        Ok(Suggestion {
            suggestions: top,
            explanation,
        })
    }
}
