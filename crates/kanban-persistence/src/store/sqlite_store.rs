use crate::traits::TaskStore;
use async_trait::async_trait;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{NewTask, Task, TaskId, TaskStatus};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Executor, Row};
use std::path::{Path, PathBuf};

const SCHEMA: &str = include_str!("../../schema.sql");

/// Task store backed by a single SQLite file.
///
/// No connection is kept between operations: each call opens the file,
/// ensures the schema exists, runs one statement and closes the connection.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> KanbanResult<SqliteConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);

        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| KanbanError::StoreOpen(format!("{}: {}", self.path.display(), e)))?;

        conn.execute(sqlx::raw_sql(SCHEMA))
            .await
            .map_err(|e| KanbanError::StoreOpen(format!("schema: {}", e)))?;

        Ok(conn)
    }

    async fn close(conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close SQLite connection: {}", e);
        }
    }

    fn row_to_task(row: &SqliteRow) -> KanbanResult<Task> {
        let scan = |e: sqlx::Error| KanbanError::Scan(e.to_string());

        let id: i64 = row.try_get("id").map_err(scan)?;
        let status: i64 = row.try_get("status").map_err(scan)?;
        let title: String = row.try_get("title").map_err(scan)?;
        let description: String = row.try_get("description").map_err(scan)?;

        Ok(Task::new(id, TaskStatus::try_from(status)?, title, description))
    }
}

fn query_error(e: sqlx::Error) -> KanbanError {
    KanbanError::Query(e.to_string())
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn create_task(&self, task: &NewTask) -> KanbanResult<TaskId> {
        let mut conn = self.open().await?;

        let result = sqlx::query("INSERT INTO tasks (status, title, description) VALUES (?, ?, ?)")
            .bind(task.status.as_i64())
            .bind(&task.title)
            .bind(&task.description)
            .execute(&mut conn)
            .await
            .map_err(query_error);

        Self::close(conn).await;
        let id = result?.last_insert_rowid();

        tracing::info!("Created task {} in {}", id, task.status);
        Ok(id)
    }

    async fn list_tasks(&self) -> KanbanResult<Vec<Task>> {
        let mut conn = self.open().await?;

        let rows = sqlx::query("SELECT id, status, title, description FROM tasks ORDER BY id")
            .fetch_all(&mut conn)
            .await
            .map_err(query_error);

        Self::close(conn).await;

        let tasks = rows?
            .iter()
            .map(Self::row_to_task)
            .collect::<KanbanResult<Vec<_>>>()?;

        tracing::info!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> KanbanResult<()> {
        let mut conn = self.open().await?;

        let result = sqlx::query("UPDATE tasks SET status = ? WHERE id = ?")
            .bind(status.as_i64())
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(query_error);

        Self::close(conn).await;

        if result?.rows_affected() == 0 {
            return Err(KanbanError::Query(format!("no task with id {}", id)));
        }
        tracing::info!("Moved task {} to {}", id, status);
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> KanbanResult<()> {
        let mut conn = self.open().await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await
            .map_err(query_error);

        Self::close(conn).await;

        if result?.rows_affected() == 0 {
            return Err(KanbanError::Query(format!("no task with id {}", id)));
        }
        tracing::info!("Deleted task {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_and_list() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));

        let first = store
            .create_task(&NewTask::new(TaskStatus::Todo, "write spec", "draft"))
            .await
            .unwrap();
        let second = store
            .create_task(&NewTask::new(TaskStatus::Done, "", ""))
            .await
            .unwrap();
        assert_ne!(first, second);

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(
            tasks,
            vec![
                Task::new(first, TaskStatus::Todo, "write spec", "draft"),
                Task::new(second, TaskStatus::Done, "", ""),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));

        assert!(store.list_tasks().await.unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_update_status() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));
        let id = store
            .create_task(&NewTask::new(TaskStatus::Todo, "a", "b"))
            .await
            .unwrap();

        store.update_status(id, TaskStatus::InProgress).await.unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));
        let keep = store
            .create_task(&NewTask::new(TaskStatus::Todo, "keep", ""))
            .await
            .unwrap();
        let gone = store
            .create_task(&NewTask::new(TaskStatus::Todo, "gone", ""))
            .await
            .unwrap();

        store.delete_task(gone).await.unwrap();

        let ids: Vec<_> = store.list_tasks().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[tokio::test]
    async fn test_missing_rows_are_query_errors() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));

        let err = store.delete_task(99).await.unwrap_err();
        assert!(matches!(err, KanbanError::Query(_)));

        let err = store.update_status(99, TaskStatus::Done).await.unwrap_err();
        assert!(matches!(err, KanbanError::Query(_)));
    }

    #[tokio::test]
    async fn test_unknown_status_is_scan_error() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("kanban.db"));
        store
            .create_task(&NewTask::new(TaskStatus::Todo, "a", ""))
            .await
            .unwrap();

        let mut conn = store.open().await.unwrap();
        sqlx::query("UPDATE tasks SET status = 9")
            .execute(&mut conn)
            .await
            .unwrap();
        SqliteStore::close(conn).await;

        let err = store.list_tasks().await.unwrap_err();
        assert!(matches!(err, KanbanError::Scan(_)));
    }

    #[tokio::test]
    async fn test_unopenable_path_is_store_open_error() {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("missing-dir").join("kanban.db"));

        let err = store.list_tasks().await.unwrap_err();
        assert!(matches!(err, KanbanError::StoreOpen(_)));
    }
}
