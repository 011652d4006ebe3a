use crate::error::KanbanError;

/// Result type shared by the storage layer and the board models.
pub type KanbanResult<T> = Result<T, KanbanError>;
