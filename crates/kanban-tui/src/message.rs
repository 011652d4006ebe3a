use crate::form::BlinkToken;
use crossterm::event::KeyEvent;
use kanban_core::{KanbanError, KanbanResult};
use kanban_domain::{NewTask, Task, TaskStatus};

/// Everything the driver delivers to the active model: terminal input,
/// timers, and the results of completed effects.
#[derive(Debug)]
pub enum Message {
    Resize(u16, u16),
    Key(KeyEvent),
    Tick,
    Blink(BlinkToken),
    TasksLoaded(KanbanResult<Vec<Task>>),
    TaskCreated(Task),
    StoreFailed(StoreFailure),
}

impl Message {
    /// Terminal size, ticks and effect results belong to the board even
    /// while the form is active.
    pub fn is_for_board(&self) -> bool {
        matches!(
            self,
            Self::Resize(..)
                | Self::Tick
                | Self::TasksLoaded(_)
                | Self::TaskCreated(_)
                | Self::StoreFailed(_)
        )
    }
}

/// A storage write that failed after the UI moved on.
#[derive(Debug)]
pub struct StoreFailure {
    pub action: &'static str,
    pub error: KanbanError,
}

impl StoreFailure {
    pub fn new(action: &'static str, error: KanbanError) -> Self {
        Self { action, error }
    }

    pub fn summary(&self) -> String {
        format!("Could not {}: {}", self.action, self.error)
    }
}

/// Transition requested by a handler. Payloads travel with the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    ToForm(TaskStatus),
    /// `Some` carries a submitted task, `None` means the form was cancelled.
    ToBoard(Option<NewTask>),
    Quit,
}

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub effect: Option<crate::effects::Effect>,
    pub transition: Transition,
}

impl Update {
    pub fn none() -> Self {
        Self {
            effect: None,
            transition: Transition::Stay,
        }
    }

    pub fn effect(effect: Option<crate::effects::Effect>) -> Self {
        Self {
            effect,
            transition: Transition::Stay,
        }
    }

    pub fn transition(transition: Transition) -> Self {
        Self {
            effect: None,
            transition,
        }
    }
}
