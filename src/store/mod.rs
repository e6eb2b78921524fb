//! SQLite-backed persistence for tasks.

use anyhow::{Context as _, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

use crate::server::data_models::Task;

/// Durable CRUD access to the task table.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    /// Open (or create) the database at `db_path` and run pending migrations.
    pub async fn connect(db_path: &Path) -> Result<Self> {
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true);

        let pool = SqlitePool::connect_with(opts).await?;
        sqlx::migrate!("src/store/migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self { pool })
    }

    /// All stored tasks, in no particular order.
    pub async fn list(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, description, status FROM tasks")
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    /// Insert `task` if it carries no id yet, otherwise overwrite the record
    /// with the matching id. Returns the stored record, id populated.
    pub async fn save(&self, task: Task) -> Result<Task> {
        match task.id {
            None => {
                let result = sqlx::query("INSERT INTO tasks (description, status) VALUES (?, ?)")
                    .bind(&task.description)
                    .bind(&task.status)
                    .execute(&self.pool)
                    .await?;

                Ok(Task {
                    id: Some(result.last_insert_rowid()),
                    ..task
                })
            }
            Some(id) => {
                sqlx::query(
                    "INSERT INTO tasks (id, description, status) VALUES (?, ?, ?)
                     ON CONFLICT(id) DO UPDATE SET
                         description = excluded.description,
                         status = excluded.status",
                )
                .bind(id)
                .bind(&task.description)
                .bind(&task.status)
                .execute(&self.pool)
                .await?;

                Ok(task)
            }
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task =
            sqlx::query_as::<_, Task>("SELECT id, description, status FROM tasks WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(task)
    }

    /// Remove the record with `id`. Deleting an absent id is a silent no-op.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
