//! Natural-language rationale for suggested tasks.
//!
//! Builds one clause list per task, in a fixed order, each clause
//! included only when its condition holds. Clauses within a task are
//! joined by ", ", tasks by " | ".

use chrono::NaiveDate;

use crate::scoring::ScoreWeights;
use crate::task::ScoredTask;

/// Importance at or above this earns a "has high importance" clause.
const HIGH_IMPORTANCE_THRESHOLD: i64 = 7;

/// Explain why the given tasks were chosen.
///
/// Urgency clauses are classified against `today` at explanation time,
/// which may differ from scoring time. Pure function of its inputs.
pub fn build_explanation(top: &[ScoredTask], today: NaiveDate, weights: &ScoreWeights) -> String {
    top.iter()
        .map(|scored| explain_task(scored, today, weights))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn explain_task(scored: &ScoredTask, today: NaiveDate, weights: &ScoreWeights) -> String {
    let task = &scored.task;
    let mut parts = vec![format!("'{}'", task.title)];

    if let Some(due) = task.due_date {
        if due < today {
            parts.push("is overdue".to_string());
        } else if (due - today).num_days() <= weights.due_soon_days {
            parts.push(format!("is due soon ({due})"));
        }
    }

    if task.importance >= HIGH_IMPORTANCE_THRESHOLD {
        parts.push("has high importance".to_string());
    }

    if task.estimated_hours <= weights.fast_task_max_hours {
        parts.push("quick to finish (low estimated hours)".to_string());
    }

    if !task.dependencies.is_empty() {
        parts.push(format!(
            "has {} dependency(ies) to consider",
            task.dependencies.len()
        ));
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    fn scored(task: TaskRecord) -> ScoredTask {
        ScoredTask { task, score: 0.0 }
    }

    #[test]
    fn due_today_counts_as_due_soon_with_iso_date() {
        let task = scored(TaskRecord::new("Taxes").with_due_date(today()));
        let text = build_explanation(&[task], today(), &ScoreWeights::default());
        assert!(text.contains("is due soon (2026-08-27)"), "got: {text}");
    }

    #[test]
    fn distant_due_date_has_no_urgency_clause() {
        let task = scored(
            TaskRecord::new("Someday")
                .with_due_date(today() + chrono::Days::new(10))
                .with_estimated_hours(3),
        );
        let text = build_explanation(&[task], today(), &ScoreWeights::default());
        assert_eq!(text, "'Someday'");
    }

    #[test]
    fn overdue_task_says_so() {
        let task = scored(TaskRecord::new("Late").with_due_date(today() - chrono::Days::new(1)));
        let text = build_explanation(&[task], today(), &ScoreWeights::default());
        assert!(text.contains("'Late', is overdue"), "got: {text}");
    }

    #[test]
    fn dependency_count_is_the_raw_count() {
        // 2 listed dependencies, one met: the explanation still says 2.
        let task = scored(
            TaskRecord::new("Build")
                .with_estimated_hours(2)
                .with_dependencies(["done dep", "pending dep"]),
        );
        let text = build_explanation(&[task], today(), &ScoreWeights::default());
        assert!(text.contains("has 2 dependency(ies) to consider"), "got: {text}");
    }

    #[test]
    fn clauses_appear_in_fixed_order() {
        let task = scored(
            TaskRecord::new("Everything")
                .with_due_date(today() - chrono::Days::new(2))
                .with_importance(9)
                .with_dependencies(["dep"]),
        );
        let text = build_explanation(&[task], today(), &ScoreWeights::default());
        assert_eq!(
            text,
            "'Everything', is overdue, has high importance, \
             quick to finish (low estimated hours), has 1 dependency(ies) to consider"
        );
    }

    #[test]
    fn tasks_are_joined_with_pipes() {
        let a = scored(TaskRecord::new("A").with_estimated_hours(2));
        let b = scored(TaskRecord::new("B").with_estimated_hours(2));
        let text = build_explanation(&[a, b], today(), &ScoreWeights::default());
        assert_eq!(text, "'A' | 'B'");
    }

    #[test]
    fn empty_input_yields_empty_explanation() {
        assert_eq!(build_explanation(&[], today(), &ScoreWeights::default()), "");
    }
}
