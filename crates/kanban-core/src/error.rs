use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Failed to open store: {0}")]
    StoreOpen(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Failed to read row: {0}")]
    Scan(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KanbanError {
    /// True for failures raised by the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StoreOpen(_) | Self::Query(_) | Self::Scan(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classification() {
        assert!(KanbanError::StoreOpen("locked".into()).is_storage());
        assert!(KanbanError::Query("no such table".into()).is_storage());
        assert!(KanbanError::Scan("bad status".into()).is_storage());

        let io = KanbanError::from(std::io::Error::other("tty gone"));
        assert!(!io.is_storage());
        assert_eq!(io.to_string(), "IO error: tty gone");
    }
}
