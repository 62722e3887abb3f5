use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::errors::ApiError;

/// A to-do item owned by exactly one user. `status` is an opaque flag whose
/// meaning is up to the caller; it defaults to `true` on creation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub task: String,
    pub description: String,
    pub priority: String,
    pub status: bool,
    pub task_date: String,
    pub user_id: i64,
}

/// Fields for a new task, with the original's defaults already applied.
#[derive(Debug)]
pub struct NewTask {
    pub task: String,
    pub description: String,
    pub priority: String,
    pub status: bool,
    pub task_date: String,
}

/// A partial update: only `Some` fields are written, the rest keep their
/// stored values.
#[derive(Debug, Default)]
pub struct TaskChanges {
    pub task: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<bool>,
    pub task_date: Option<String>,
}

const SELECT_TASK: &str =
    "SELECT id, task, description, priority, status, task_date, user_id FROM tasks WHERE id = ?";

impl Task {
    /// All tasks belonging to `user_id`, in insertion order.
    pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<Task>, ApiError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, task, description, priority, status, task_date, user_id
             FROM tasks WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(tasks)
    }

    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        new: NewTask,
    ) -> Result<Task, ApiError> {
        if new.task.trim().is_empty() {
            return Err(ApiError::InvalidInput("Invalid task data".into()));
        }
        validate_task_date(&new.task_date)?;

        let id = sqlx::query(
            "INSERT INTO tasks (task, description, priority, status, task_date, user_id)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.task)
        .bind(&new.description)
        .bind(&new.priority)
        .bind(new.status)
        .bind(&new.task_date)
        .bind(user_id)
        .execute(pool)
        .await?
        .last_insert_rowid();

        Ok(Task {
            id,
            task: new.task,
            description: new.description,
            priority: new.priority,
            status: new.status,
            task_date: new.task_date,
            user_id,
        })
    }

    /// Apply a partial update. Runs in one transaction: the ownership check
    /// and the write either both happen or neither does, so a validation
    /// failure can never leave a half-written row.
    pub async fn update(
        pool: &SqlitePool,
        task_id: i64,
        user_id: i64,
        changes: TaskChanges,
    ) -> Result<Task, ApiError> {
        let mut tx = pool.begin().await?;

        let mut task = sqlx::query_as::<_, Task>(SELECT_TASK)
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ApiError::NotFound("Task not found".into()))?;
        if task.user_id != user_id {
            return Err(ApiError::Forbidden("Task belongs to another user".into()));
        }

        if let Some(title) = changes.task {
            if title.trim().is_empty() {
                return Err(ApiError::InvalidInput("Invalid task data".into()));
            }
            task.task = title;
        }
        if let Some(description) = changes.description {
            task.description = description;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(task_date) = changes.task_date {
            validate_task_date(&task_date)?;
            task.task_date = task_date;
        }

        sqlx::query(
            "UPDATE tasks SET task = ?, description = ?, priority = ?, status = ?, task_date = ?
             WHERE id = ?",
        )
        .bind(&task.task)
        .bind(&task.description)
        .bind(&task.priority)
        .bind(task.status)
        .bind(&task.task_date)
        .bind(task.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(task)
    }

    /// Delete a task after the same ownership check as `update`. Deleting a
    /// task that is already gone reports not-found.
    pub async fn delete(pool: &SqlitePool, task_id: i64, user_id: i64) -> Result<(), ApiError> {
        let mut tx = pool.begin().await?;

        let task = sqlx::query_as::<_, Task>(SELECT_TASK)
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| ApiError::NotFound("Task not found".into()))?;
        if task.user_id != user_id {
            return Err(ApiError::Forbidden("Task belongs to another user".into()));
        }

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Dates travel as strings; a non-empty one must be a real `YYYY-MM-DD` date.
fn validate_task_date(task_date: &str) -> Result<(), ApiError> {
    if task_date.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(task_date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ApiError::InvalidInput("Invalid task date, expected YYYY-MM-DD".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_date_is_allowed() {
        assert!(validate_task_date("").is_ok());
    }

    #[test]
    fn iso_date_is_allowed() {
        assert!(validate_task_date("2024-01-01").is_ok());
        assert!(validate_task_date("2024-02-29").is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(validate_task_date("13/45/2024").is_err());
        assert!(validate_task_date("2024-13-01").is_err());
        assert!(validate_task_date("2023-02-29").is_err());
        assert!(validate_task_date("tomorrow").is_err());
    }
}
