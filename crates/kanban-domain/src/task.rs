use kanban_core::{KanbanError, KanbanResult};
use std::fmt;

/// Row id assigned by the store when a task is created.
pub type TaskId = i64;

/// Stage of a task. The discriminant doubles as the board column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Forward step around the ring; `Done` wraps to `Todo`.
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }

    /// Backward step around the ring; `Todo` wraps to `Done`.
    pub fn prev(self) -> Self {
        match self {
            Self::Todo => Self::Done,
            Self::InProgress => Self::Todo,
            Self::Done => Self::InProgress,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    pub fn as_i64(self) -> i64 {
        self.index() as i64
    }
}

impl TryFrom<i64> for TaskStatus {
    type Error = KanbanError;

    fn try_from(value: i64) -> KanbanResult<Self> {
        match value {
            0 => Ok(Self::Todo),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Done),
            other => Err(KanbanError::Scan(format!("unknown task status {}", other))),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(
        id: TaskId,
        status: TaskStatus,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Moves the task one stage forward and returns the new status.
    pub fn advance(&mut self) -> TaskStatus {
        self.status = self.status.next();
        self.status
    }
}

/// A task that has been captured but not yet assigned an id by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
}

impl NewTask {
    pub fn new(status: TaskStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            status: self.status,
            title: self.title,
            description: self.description,
        }
    }
}
