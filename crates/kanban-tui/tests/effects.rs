use async_trait::async_trait;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{NewTask, Task, TaskId, TaskStatus};
use kanban_persistence::TaskStore;
use kanban_tui::effects::{execute, Effect, EffectRunner};
use kanban_tui::form::{BlinkToken, FormField};
use kanban_tui::message::Message;
use mockall::{mock, predicate::eq, Sequence};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

mock! {
    pub Store {}

    #[async_trait]
    impl TaskStore for Store {
        async fn create_task(&self, task: &NewTask) -> KanbanResult<TaskId>;
        async fn list_tasks(&self) -> KanbanResult<Vec<Task>>;
        async fn update_status(&self, id: TaskId, status: TaskStatus) -> KanbanResult<()>;
        async fn delete_task(&self, id: TaskId) -> KanbanResult<()>;
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_create_uses_assigned_id() {
    let mut store = MockStore::new();
    store
        .expect_create_task()
        .withf(|task| task.title == "x" && task.status == TaskStatus::InProgress)
        .times(1)
        .returning(|_| Ok(7));

    let effect = Effect::CreateTask(NewTask::new(TaskStatus::InProgress, "x", "y"));
    let message = execute(&store, effect).await;

    match message {
        Some(Message::TaskCreated(task)) => {
            assert_eq!(task, Task::new(7, TaskStatus::InProgress, "x", "y"));
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_create_reports_failure() {
    let mut store = MockStore::new();
    store
        .expect_create_task()
        .returning(|_| Err(KanbanError::Query("disk full".to_string())));

    let effect = Effect::CreateTask(NewTask::new(TaskStatus::Todo, "x", ""));
    match execute(&store, effect).await {
        Some(Message::StoreFailed(failure)) => {
            assert_eq!(failure.action, "create task");
            assert!(failure.summary().contains("disk full"));
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_successful_writes_produce_no_message() {
    let mut store = MockStore::new();
    store
        .expect_update_status()
        .with(eq(3), eq(TaskStatus::Done))
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_delete_task()
        .with(eq(3))
        .times(1)
        .returning(|_| Ok(()));

    let moved = execute(
        &store,
        Effect::UpdateStatus {
            id: 3,
            status: TaskStatus::Done,
        },
    )
    .await;
    assert!(moved.is_none());
    assert!(execute(&store, Effect::DeleteTask(3)).await.is_none());
}

#[tokio::test]
async fn test_failed_move_reports_failure() {
    let mut store = MockStore::new();
    store
        .expect_update_status()
        .returning(|_, _| Err(KanbanError::Query("no such task".to_string())));

    let effect = Effect::UpdateStatus {
        id: 9,
        status: TaskStatus::InProgress,
    };
    match execute(&store, effect).await {
        Some(Message::StoreFailed(failure)) => assert_eq!(failure.action, "move task"),
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_load_is_delivered_as_error() {
    let mut store = MockStore::new();
    store
        .expect_list_tasks()
        .returning(|| Err(KanbanError::StoreOpen("locked".to_string())));

    match execute(&store, Effect::LoadTasks).await {
        Some(Message::TasksLoaded(Err(e))) => assert!(e.is_storage()),
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_blink_never_touches_store() {
    let store = MockStore::new();
    let token = BlinkToken {
        form_id: 1,
        field: FormField::Title,
    };
    assert!(matches!(
        execute(&store, Effect::Blink(token)).await,
        Some(Message::Blink(t)) if t == token
    ));
}

#[tokio::test]
async fn test_runner_executes_writes_in_order() {
    let mut store = MockStore::new();
    let mut seq = Sequence::new();
    store
        .expect_update_status()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    store
        .expect_delete_task()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(KanbanError::Query("gone".to_string())));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = EffectRunner::start(Arc::new(store), tx, Duration::from_millis(10));
    runner.dispatch_all(vec![
        Effect::UpdateStatus {
            id: 1,
            status: TaskStatus::InProgress,
        },
        Effect::DeleteTask(1),
    ]);

    let message = timeout(WAIT, rx.recv()).await.unwrap();
    match message {
        Some(Message::StoreFailed(failure)) => assert_eq!(failure.action, "delete task"),
        other => panic!("unexpected message: {:?}", other),
    }
}

#[tokio::test]
async fn test_runner_redelivers_blink_after_interval() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = EffectRunner::start(Arc::new(MockStore::new()), tx, Duration::from_millis(10));
    let token = BlinkToken {
        form_id: 2,
        field: FormField::Description,
    };

    runner.dispatch(Effect::Blink(token));

    let message = timeout(WAIT, rx.recv()).await.unwrap();
    assert!(matches!(message, Some(Message::Blink(t)) if t == token));
}
