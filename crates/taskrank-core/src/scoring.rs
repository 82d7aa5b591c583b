//! Task priority scoring.
//!
//! Computes an additive point score per task based on:
//! - User-defined importance (importance x weight)
//! - Urgency (overdue bonus, due-soon bonus, linear proximity bonus)
//! - Task size (fast-task bonus, capped large-task penalty)
//! - Unmet dependencies (flat penalty per unmet dependency)
//!
//! Scoring is a pure function of the full batch and an injected "today":
//! a task's score may depend on the done-status of other tasks in the
//! same batch (dependency lookup) but never mutates them. Completed
//! tasks always score 0.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{ScoredTask, TaskRecord};

/// Scoring weights and thresholds.
///
/// All values are fixed design parameters with the defaults below;
/// configuration may override them (see `storage::Config`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Multiplier for importance (importance assumed 1..10)
    #[serde(default = "default_importance_weight")]
    pub importance_weight: f64,
    /// Bonus for tasks past their due date
    #[serde(default = "default_overdue_bonus")]
    pub overdue_bonus: f64,
    /// Bonus for tasks due within `due_soon_days`
    #[serde(default = "default_due_soon_bonus")]
    pub due_soon_bonus: f64,
    /// Due within N days counts as "due soon"
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,
    /// Extra points per day of proximity inside the due-soon window
    #[serde(default = "default_proximity_weight")]
    pub proximity_weight: f64,
    /// Estimated hours at or below this count as a fast task
    #[serde(default = "default_fast_task_max_hours")]
    pub fast_task_max_hours: i64,
    /// Bonus for fast tasks (quick wins)
    #[serde(default = "default_fast_task_bonus")]
    pub fast_task_bonus: f64,
    /// Penalty per estimated hour for larger tasks
    #[serde(default = "default_large_task_penalty_per_hour")]
    pub large_task_penalty_per_hour: f64,
    /// Cap on the large-task penalty
    #[serde(default = "default_large_task_penalty_cap")]
    pub large_task_penalty_cap: f64,
    /// Penalty per unmet dependency
    #[serde(default = "default_dependency_penalty")]
    pub dependency_penalty: f64,
}

fn default_importance_weight() -> f64 {
    3.0
}
fn default_overdue_bonus() -> f64 {
    50.0
}
fn default_due_soon_bonus() -> f64 {
    20.0
}
fn default_due_soon_days() -> i64 {
    3
}
fn default_proximity_weight() -> f64 {
    2.0
}
fn default_fast_task_max_hours() -> i64 {
    1
}
fn default_fast_task_bonus() -> f64 {
    5.0
}
fn default_large_task_penalty_per_hour() -> f64 {
    0.5
}
fn default_large_task_penalty_cap() -> f64 {
    10.0
}
fn default_dependency_penalty() -> f64 {
    15.0
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            importance_weight: default_importance_weight(),
            overdue_bonus: default_overdue_bonus(),
            due_soon_bonus: default_due_soon_bonus(),
            due_soon_days: default_due_soon_days(),
            proximity_weight: default_proximity_weight(),
            fast_task_max_hours: default_fast_task_max_hours(),
            fast_task_bonus: default_fast_task_bonus(),
            large_task_penalty_per_hour: default_large_task_penalty_per_hour(),
            large_task_penalty_cap: default_large_task_penalty_cap(),
            dependency_penalty: default_dependency_penalty(),
        }
    }
}

/// Scoring configuration.
///
/// Carries the weights and the calendar date used for urgency
/// classification. "Today" is injected here rather than read from the
/// system clock so tests get reproducible overdue/due-soon behavior.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub today: NaiveDate,
}

impl ScoringConfig {
    /// Default weights with the given date as "today".
    pub fn new(today: NaiveDate) -> Self {
        Self {
            weights: ScoreWeights::default(),
            today,
        }
    }

    /// Custom weights with the given date as "today".
    pub fn with_weights(today: NaiveDate, weights: ScoreWeights) -> Self {
        Self { weights, today }
    }
}

/// Compute the priority score for a single task.
///
/// `batch` is the full set of tasks the record belongs to and is used
/// only for dependency resolution. The function is total: it never
/// fails for any well-formed [`TaskRecord`].
pub fn compute_score(task: &TaskRecord, batch: &[TaskRecord], config: &ScoringConfig) -> f64 {
    // Completed tasks get minimal priority, unconditionally.
    if task.done {
        return 0.0;
    }

    let w = &config.weights;
    let importance = task.importance.max(0);
    let estimated = task.estimated_hours.max(0);

    let mut score = importance as f64 * w.importance_weight;

    if let Some(due) = task.due_date {
        if due < config.today {
            score += w.overdue_bonus;
        } else {
            let days_left = (due - config.today).num_days();
            if days_left <= w.due_soon_days {
                score += w.due_soon_bonus;
            }
            // Linear proximity bonus: closer due date, slightly higher
            // score. Zero once outside the due-soon window.
            score += ((w.due_soon_days - days_left) as f64 * w.proximity_weight).max(0.0);
        }
    }

    if estimated <= w.fast_task_max_hours {
        score += w.fast_task_bonus;
    } else {
        score -= (estimated as f64 * w.large_task_penalty_per_hour).min(w.large_task_penalty_cap);
    }

    let unmet = task
        .dependencies
        .iter()
        .filter(|dep| !dependency_met(dep, batch))
        .count();
    score -= w.dependency_penalty * unmet as f64;

    if score < 0.0 {
        score = 0.0;
    }

    round3(score)
}

/// A dependency is met when any batch task with a matching title
/// (case-insensitive, trimmed) is done. No matching task at all means
/// an external dependency, assumed unmet.
fn dependency_met(dependency: &str, batch: &[TaskRecord]) -> bool {
    let needle = dependency.trim().to_lowercase();
    batch
        .iter()
        .any(|task| task.done && task.title.trim().to_lowercase() == needle)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Score a batch of tasks and return them in priority order.
///
/// Every task is scored against the entire batch, so dependency
/// resolution is symmetric and independent of input order. Ordering is
/// score descending, then importance descending, then due date
/// ascending with undated tasks last; remaining ties keep their input
/// order (stable sort).
pub fn analyze_tasks(tasks: &[TaskRecord], config: &ScoringConfig) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| ScoredTask {
            task: task.clone(),
            score: compute_score(task, tasks, config),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.task.importance.cmp(&a.task.importance))
            .then_with(|| cmp_due_date(a.task.due_date, b.task.due_date))
    });

    scored
}

/// Earlier due dates first; no due date sorts last.
fn cmp_due_date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn config() -> ScoringConfig {
        ScoringConfig::new(today())
    }

    #[test]
    fn done_task_scores_zero() {
        let task = TaskRecord::new("Done already")
            .with_importance(10)
            .with_due_date(today() - chrono::Days::new(5))
            .with_done(true);
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 0.0);
    }

    #[test]
    fn baseline_task_scores_eight() {
        // importance 1 * 3.0 + fast-task bonus 5.0
        let task = TaskRecord::new("Baseline");
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 8.0);
    }

    #[test]
    fn overdue_task_gets_overdue_bonus() {
        // 15 (importance) + 50 (overdue) + 5 (fast) = 70
        let task = TaskRecord::new("Late")
            .with_importance(5)
            .with_due_date(today() - chrono::Days::new(1));
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 70.0);
    }

    #[test]
    fn due_today_gets_soon_and_full_proximity_bonus() {
        // 3 + 20 (due soon) + 6 (proximity, 3 days * 2.0) + 5 (fast) = 34
        let task = TaskRecord::new("Today").with_due_date(today());
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 34.0);
    }

    #[test]
    fn due_at_window_edge_gets_soon_bonus_without_proximity() {
        // 3 + 20 + 0 + 5 = 28
        let task = TaskRecord::new("Edge").with_due_date(today() + chrono::Days::new(3));
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 28.0);
    }

    #[test]
    fn due_outside_window_gets_no_urgency_bonus() {
        let task = TaskRecord::new("Later").with_due_date(today() + chrono::Days::new(10));
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 8.0);
    }

    #[test]
    fn large_task_penalty_is_capped() {
        // 15 - min(30 * 0.5, 10) = 5
        let task = TaskRecord::new("Huge")
            .with_importance(5)
            .with_estimated_hours(30);
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 5.0);
    }

    #[test]
    fn medium_task_penalty_scales_with_hours() {
        // 3 - 4 * 0.5 = 1
        let task = TaskRecord::new("Medium").with_estimated_hours(4);
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 1.0);
    }

    #[test]
    fn unknown_dependency_counts_as_unmet() {
        // 15 + 5 - 15 = 5
        let task = TaskRecord::new("Blocked")
            .with_importance(5)
            .with_dependencies(["nowhere to be found"]);
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 5.0);
    }

    #[test]
    fn dependency_on_done_task_is_met() {
        let dep = TaskRecord::new("Alpha").with_done(true);
        let task = TaskRecord::new("Beta")
            .with_importance(5)
            .with_dependencies(["Alpha"]);
        let batch = vec![dep, task.clone()];
        assert_eq!(compute_score(&task, &batch, &config()), 20.0);
    }

    #[test]
    fn dependency_match_is_case_insensitive_and_trimmed() {
        let dep = TaskRecord::new("  ALPHA  ").with_done(true);
        let task = TaskRecord::new("Beta")
            .with_importance(5)
            .with_dependencies(["alpha"]);
        let batch = vec![dep, task.clone()];
        assert_eq!(compute_score(&task, &batch, &config()), 20.0);
    }

    #[test]
    fn duplicate_titles_met_when_any_is_done() {
        let pending = TaskRecord::new("Alpha");
        let finished = TaskRecord::new("Alpha").with_done(true);
        let task = TaskRecord::new("Beta")
            .with_importance(5)
            .with_dependencies(["alpha"]);
        let batch = vec![pending, finished, task.clone()];
        assert_eq!(compute_score(&task, &batch, &config()), 20.0);
    }

    #[test]
    fn dependency_on_pending_task_is_unmet() {
        let dep = TaskRecord::new("Alpha");
        let task = TaskRecord::new("Beta")
            .with_importance(5)
            .with_dependencies(["Alpha"]);
        let batch = vec![dep, task.clone()];
        // 15 + 5 - 15 = 5
        assert_eq!(compute_score(&task, &batch, &config()), 5.0);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let task = TaskRecord::new("Hopeless")
            .with_importance(0)
            .with_dependencies(["a", "b", "c"]);
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 0.0);
    }

    #[test]
    fn negative_importance_is_floored_at_zero() {
        let task = TaskRecord::new("Odd").with_importance(-5);
        // 0 * 3 + 5 (fast) = 5
        assert_eq!(compute_score(&task, &[task.clone()], &config()), 5.0);
    }

    #[test]
    fn analyze_orders_by_importance_over_size() {
        let a = TaskRecord::new("A")
            .with_importance(10)
            .with_estimated_hours(5);
        let b = TaskRecord::new("B");
        let result = analyze_tasks(&[a, b], &config());
        assert_eq!(result[0].task.title, "A");
        assert_eq!(result[1].task.title, "B");
        // A: 30 - 2.5 = 27.5, B: 3 + 5 = 8
        assert_eq!(result[0].score, 27.5);
        assert_eq!(result[1].score, 8.0);
    }

    #[test]
    fn analyze_breaks_score_ties_by_due_date_with_none_last() {
        let undated = TaskRecord::new("Undated");
        let dated = TaskRecord::new("Dated").with_due_date(today() + chrono::Days::new(10));
        let result = analyze_tasks(&[undated, dated], &config());
        assert_eq!(result[0].score, result[1].score);
        assert_eq!(result[0].task.title, "Dated");
    }

    #[test]
    fn analyze_does_not_mutate_input() {
        let tasks = vec![TaskRecord::new("A"), TaskRecord::new("B").with_done(true)];
        let before = tasks.clone();
        let _ = analyze_tasks(&tasks, &config());
        assert_eq!(tasks, before);
    }

    #[test]
    fn scoring_is_idempotent() {
        let tasks = vec![
            TaskRecord::new("A").with_due_date(today()),
            TaskRecord::new("B").with_dependencies(["A"]),
            TaskRecord::new("C").with_importance(9).with_done(true),
        ];
        let cfg = config();
        assert_eq!(analyze_tasks(&tasks, &cfg), analyze_tasks(&tasks, &cfg));
    }

    proptest! {
        #[test]
        fn score_is_never_negative(
            importance in -20i64..20,
            estimated in -5i64..100,
            due_offset in proptest::option::of(-10i64..10),
            done in any::<bool>(),
            dep_count in 0usize..4,
        ) {
            let mut task = TaskRecord::new("Prop")
                .with_importance(importance)
                .with_estimated_hours(estimated)
                .with_done(done)
                .with_dependencies((0..dep_count).map(|i| format!("dep {i}")));
            if let Some(offset) = due_offset {
                task.due_date = Some(if offset < 0 {
                    today() - chrono::Days::new(offset.unsigned_abs())
                } else {
                    today() + chrono::Days::new(offset as u64)
                });
            }
            let batch = vec![task.clone()];
            let cfg = config();
            let score = compute_score(&task, &batch, &cfg);
            prop_assert!(score >= 0.0);
            // Same input, same output.
            prop_assert_eq!(score, compute_score(&task, &batch, &cfg));
        }
    }
}
