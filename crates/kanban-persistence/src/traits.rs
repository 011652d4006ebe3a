use async_trait::async_trait;
use kanban_core::KanbanResult;
use kanban_domain::{NewTask, Task, TaskId, TaskStatus};

/// CRUD access to the task table.
///
/// Implementations must not hold a connection between calls; every method
/// opens the store, performs its statement and closes it again.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts the task and returns the id the store assigned to it.
    async fn create_task(&self, task: &NewTask) -> KanbanResult<TaskId>;

    /// Returns every task in a stable order.
    async fn list_tasks(&self) -> KanbanResult<Vec<Task>>;

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> KanbanResult<()>;

    async fn delete_task(&self, id: TaskId) -> KanbanResult<()>;
}
