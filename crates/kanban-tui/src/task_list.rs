use crossterm::event::{KeyCode, KeyEvent};
use kanban_core::SelectionState;
use kanban_domain::{Task, TaskStatus};

/// One board column: the tasks with a given status, in insertion order.
#[derive(Debug, Clone)]
pub struct TaskList {
    status: TaskStatus,
    tasks: Vec<Task>,
    selection: SelectionState,
}

impl TaskList {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
            selection: SelectionState::new(),
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn title(&self) -> &'static str {
        self.status.title()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.get(idx))
    }

    pub fn select(&mut self, index: Option<usize>) {
        match index {
            Some(idx) if idx < self.tasks.len() => self.selection.set(Some(idx)),
            Some(_) => {}
            None => self.selection.set(None),
        }
    }

    /// Appends a task to the end of the column.
    pub fn push(&mut self, task: Task) {
        debug_assert_eq!(task.status, self.status);
        self.tasks.push(task);
        self.selection.clamp(self.tasks.len());
    }

    /// Removes and returns the selected task. The cursor stays at the same
    /// position, clamped to the shorter list.
    pub fn remove_selected(&mut self) -> Option<Task> {
        let idx = self.selection.get()?;
        if idx >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(idx);
        self.selection.clamp(self.tasks.len());
        Some(task)
    }

    pub fn select_prev(&mut self) {
        self.selection.prev(self.tasks.len());
    }

    pub fn select_next(&mut self) {
        self.selection.next(self.tasks.len());
    }

    /// List-local navigation keys. Returns false when the key is not one.
    pub fn navigate(&mut self, key: &KeyEvent) -> bool {
        let len = self.tasks.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selection.prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.selection.next(len),
            KeyCode::Home | KeyCode::Char('g') => self.selection.first(len),
            KeyCode::End | KeyCode::Char('G') => self.selection.last(len),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn list_with(titles: &[&str]) -> TaskList {
        let mut list = TaskList::new(TaskStatus::Todo);
        for (idx, title) in titles.iter().enumerate() {
            list.push(Task::new(idx as i64 + 1, TaskStatus::Todo, *title, ""));
        }
        list
    }

    fn titles(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_first_push_selects_it() {
        let list = list_with(&["a"]);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_push_keeps_selection() {
        let mut list = list_with(&["a", "b"]);
        list.select(Some(1));
        list.push(Task::new(9, TaskStatus::Todo, "c", ""));
        assert_eq!(list.selected_task().map(|t| t.title.as_str()), Some("b"));
        assert_eq!(titles(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_selected_from_middle() {
        let mut list = list_with(&["a", "b", "c"]);
        list.select(Some(1));
        let removed = list.remove_selected().unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&list), vec!["a", "c"]);
        assert_eq!(list.selected_task().map(|t| t.title.as_str()), Some("c"));
    }

    #[test]
    fn test_remove_last_moves_cursor_up() {
        let mut list = list_with(&["a", "b"]);
        list.select(Some(1));
        list.remove_selected();
        assert_eq!(list.selected_index(), Some(0));
        list.remove_selected();
        assert_eq!(list.selected_index(), None);
        assert!(list.remove_selected().is_none());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut list = list_with(&["a"]);
        list.select(Some(5));
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_navigation_keys() {
        let mut list = list_with(&["a", "b", "c"]);
        let key = |c| KeyEvent::new(c, KeyModifiers::NONE);

        assert!(list.navigate(&key(KeyCode::Char('j'))));
        assert_eq!(list.selected_index(), Some(1));
        assert!(list.navigate(&key(KeyCode::Char('G'))));
        assert_eq!(list.selected_index(), Some(2));
        assert!(list.navigate(&key(KeyCode::Char('k'))));
        assert_eq!(list.selected_index(), Some(1));
        assert!(list.navigate(&key(KeyCode::Home)));
        assert_eq!(list.selected_index(), Some(0));
        assert!(!list.navigate(&key(KeyCode::Char('z'))));
    }
}
