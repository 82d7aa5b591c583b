//! Task store commands.

use chrono::NaiveDate;
use clap::Subcommand;
use taskrank_core::{StoredTask, TaskDb, TaskRecord};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the store
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Importance (1-10)
        #[arg(long, default_value = "1")]
        importance: i64,
        /// Estimated hours
        #[arg(long, default_value = "1")]
        hours: i64,
        /// Comma-separated dependency titles
        #[arg(long)]
        depends_on: Option<String>,
    },
    /// List recently created tasks, newest first
    List {
        /// Maximum number of tasks
        #[arg(long, default_value = "50")]
        limit: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;

    match action {
        TaskAction::Add {
            title,
            due,
            importance,
            hours,
            depends_on,
        } => {
            let due_date = match due {
                Some(raw) => Some(
                    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .map_err(|_| format!("invalid due date '{raw}', expected YYYY-MM-DD"))?,
                ),
                None => None,
            };
            let dependencies: Vec<String> = depends_on
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            let mut record = TaskRecord::new(title)
                .with_importance(importance)
                .with_estimated_hours(hours)
                .with_dependencies(dependencies);
            record.due_date = due_date;

            let stored = StoredTask::from_record(&record);
            db.create_task(&stored)?;
            println!("Task created: {}", stored.id);
        }
        TaskAction::List { limit, json } => {
            let tasks = db.list_recent(limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for task in &tasks {
                    let due = task
                        .due_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{}  {:<30}  due: {:<10}  importance: {}  hours: {}",
                        task.id, task.title, due, task.importance, task.estimated_hours
                    );
                }
            }
        }
    }

    Ok(())
}
