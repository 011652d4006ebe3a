//! Positional selection over a list whose length changes underneath it.

/// Index of the selected item, or `None` when the list is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Re-validates the selection after the list changed to `len` items.
    ///
    /// A removal keeps the cursor on the same position (now the following
    /// item), falling back to the new last item. A list that gains its
    /// first item selects it.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_stop_at_bounds() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        selection.next(3);
        selection.next(3);
        assert_eq!(selection.get(), Some(2));

        selection.prev(3);
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_empty_list_never_selects() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        selection.first(0);
        selection.last(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_first_and_last() {
        let mut selection = SelectionState::new();
        selection.last(4);
        assert!(selection.is_selected(3));
        selection.first(4);
        assert!(selection.is_selected(0));
    }

    #[test]
    fn test_clamp_after_removal() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));

        // Removing the last of three items moves the cursor up
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));

        // Removing a middle item keeps the position
        selection.set(Some(0));
        selection.clamp(1);
        assert_eq!(selection.get(), Some(0));

        selection.clamp(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp_selects_first_new_item() {
        let mut selection = SelectionState::new();
        selection.clamp(1);
        assert_eq!(selection.get(), Some(0));
    }
}
