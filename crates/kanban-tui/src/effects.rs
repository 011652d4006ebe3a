//! Deferred work returned by the models and executed by the driver.
//!
//! Storage effects run one at a time, in the order they were issued, on a
//! background task. Their outcome comes back through the event channel as
//! an ordinary [`Message`]; writes that succeed produce nothing.

use crate::form::BlinkToken;
use crate::message::{Message, StoreFailure};
use kanban_domain::{NewTask, TaskId, TaskStatus};
use kanban_persistence::TaskStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadTasks,
    CreateTask(NewTask),
    UpdateStatus { id: TaskId, status: TaskStatus },
    DeleteTask(TaskId),
    Blink(BlinkToken),
}

impl Effect {
    pub fn is_storage(&self) -> bool {
        !matches!(self, Self::Blink(_))
    }
}

/// Runs a single effect to completion and returns the message to redeliver.
///
/// Blink timers are not delayed here; [`EffectRunner`] owns the timing.
pub async fn execute(store: &dyn TaskStore, effect: Effect) -> Option<Message> {
    match effect {
        Effect::LoadTasks => {
            let result = store.list_tasks().await;
            if let Err(e) = &result {
                tracing::error!("Failed to load tasks: {}", e);
            }
            Some(Message::TasksLoaded(result))
        }
        Effect::CreateTask(task) => match store.create_task(&task).await {
            Ok(id) => Some(Message::TaskCreated(task.with_id(id))),
            Err(e) => {
                tracing::error!("Failed to create task {:?}: {}", task.title, e);
                Some(Message::StoreFailed(StoreFailure::new("create task", e)))
            }
        },
        Effect::UpdateStatus { id, status } => match store.update_status(id, status).await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Failed to move task {} to {}: {}", id, status, e);
                Some(Message::StoreFailed(StoreFailure::new("move task", e)))
            }
        },
        Effect::DeleteTask(id) => match store.delete_task(id).await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Failed to delete task {}: {}", id, e);
                Some(Message::StoreFailed(StoreFailure::new("delete task", e)))
            }
        },
        Effect::Blink(token) => Some(Message::Blink(token)),
    }
}

pub struct EffectRunner {
    store_tx: mpsc::UnboundedSender<Effect>,
    results: mpsc::UnboundedSender<Message>,
    blink_interval: Duration,
}

impl EffectRunner {
    /// Spawns the storage worker. Must be called inside a tokio runtime.
    pub fn start(
        store: Arc<dyn TaskStore>,
        results: mpsc::UnboundedSender<Message>,
        blink_interval: Duration,
    ) -> Self {
        let (store_tx, mut store_rx) = mpsc::unbounded_channel::<Effect>();
        let worker_results = results.clone();

        tokio::spawn(async move {
            while let Some(effect) = store_rx.recv().await {
                tracing::debug!("Executing {:?}", effect);
                if let Some(message) = execute(store.as_ref(), effect).await {
                    if worker_results.send(message).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("Storage worker stopped");
        });

        Self {
            store_tx,
            results,
            blink_interval,
        }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::Blink(token) => {
                let results = self.results.clone();
                let interval = self.blink_interval;
                tokio::spawn(async move {
                    tokio::time::sleep(interval).await;
                    let _ = results.send(Message::Blink(token));
                });
            }
            effect => {
                if let Err(e) = self.store_tx.send(effect) {
                    tracing::error!("Storage worker is gone, dropping {:?}", e.0);
                }
            }
        }
    }

    pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }
}
