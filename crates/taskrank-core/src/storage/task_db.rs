//! SQLite-based task storage.
//!
//! Persists sanitized task records keyed by an opaque UUID. Scores are
//! never written; loading a record yields a task with `done = false`.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{DatabaseError, Result};
use crate::task::StoredTask;

/// SQLite database for task storage.
pub struct TaskDb {
    conn: Connection,
}

impl TaskDb {
    /// Open the database at `~/.config/taskrank/taskrank.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("taskrank.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id              TEXT PRIMARY KEY,
                    title           TEXT NOT NULL,
                    due_date        TEXT,
                    importance      INTEGER NOT NULL DEFAULT 1,
                    estimated_hours INTEGER NOT NULL DEFAULT 1,
                    dependencies    TEXT NOT NULL DEFAULT '[]',
                    created_at      TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    /// Insert a task record.
    pub fn create_task(&self, task: &StoredTask) -> Result<()> {
        let deps_json = serde_json::to_string(&task.dependencies).unwrap();
        self.conn
            .execute(
                "INSERT INTO tasks (id, title, due_date, importance, estimated_hours, dependencies, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    task.id,
                    task.title,
                    task.due_date.map(|d| d.to_string()),
                    task.importance,
                    task.estimated_hours,
                    deps_json,
                    task.created_at.to_rfc3339(),
                ],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// List the most recently created tasks, newest first, up to `limit`.
    pub fn list_recent(&self, limit: u32) -> Result<Vec<StoredTask>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, due_date, importance, estimated_hours, dependencies, created_at
                 FROM tasks
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT ?1",
            )
            .map_err(DatabaseError::from)?;

        let rows = stmt
            .query_map(params![limit], row_to_stored_task)
            .map_err(DatabaseError::from)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(DatabaseError::from)?);
        }
        Ok(tasks)
    }

    /// Number of stored tasks.
    pub fn count(&self) -> Result<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
            .map_err(DatabaseError::from)?;
        Ok(count)
    }
}

/// Build a StoredTask from a database row.
fn row_to_stored_task(row: &rusqlite::Row) -> Result<StoredTask, rusqlite::Error> {
    let due_date_str: Option<String> = row.get(2)?;
    let due_date = due_date_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

    let deps_json: String = row.get(5)?;
    let dependencies: Vec<String> = serde_json::from_str(&deps_json).unwrap_or_default();

    let created_at_str: String = row.get(6)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(StoredTask {
        id: row.get(0)?,
        title: row.get(1)?,
        due_date,
        importance: row.get(3)?,
        estimated_hours: row.get(4)?,
        dependencies,
        created_at,
    })
}
