use crate::components::Banner;
use crate::effects::Effect;
use crate::keybindings::{KeyAction, KeyMap};
use crate::message::{Message, StoreFailure, Transition, Update};
use crate::task_list::TaskList;
use crossterm::event::KeyEvent;
use kanban_core::KanbanResult;
use kanban_domain::{Task, TaskStatus};
use std::time::Duration;

pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Columns share the width equally.
pub const COLUMN_DIVISOR: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Pending,
    Loading,
    Loaded,
}

/// The three-column board.
///
/// Every task lives in exactly one list and that list is the one indexed
/// by the task's status.
#[derive(Debug, Clone)]
pub struct BoardModel {
    load_state: LoadState,
    focus: TaskStatus,
    lists: [TaskList; 3],
    size: Option<(u16, u16)>,
    show_full_help: bool,
    banner: Option<Banner>,
}

impl BoardModel {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Pending,
            focus: TaskStatus::Todo,
            lists: TaskStatus::ALL.map(TaskList::new),
            size: None,
            show_full_help: false,
            banner: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    pub fn focus(&self) -> TaskStatus {
        self.focus
    }

    pub fn list(&self, status: TaskStatus) -> &TaskList {
        &self.lists[status.index()]
    }

    pub fn lists(&self) -> &[TaskList; 3] {
        &self.lists
    }

    pub fn tasks(&self, status: TaskStatus) -> &[Task] {
        self.list(status).tasks()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Width and height of one column for the last reported terminal size.
    pub fn column_size(&self) -> (u16, u16) {
        let (width, height) = self.size.unwrap_or_default();
        (width / COLUMN_DIVISOR, height / 2)
    }

    pub fn show_full_help(&self) -> bool {
        self.show_full_help
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn expire_banner(&mut self) {
        if let Some(banner) = self.banner.as_mut() {
            if let Some(old) = banner.created_at.checked_sub(BANNER_TTL * 2) {
                banner.created_at = old;
            }
        }
    }

    fn focused_list_mut(&mut self) -> &mut TaskList {
        &mut self.lists[self.focus.index()]
    }

    /// Selects a task in the focused column by position.
    pub fn select(&mut self, index: usize) {
        self.focused_list_mut().select(Some(index));
    }

    /// Records the terminal size and, on the first call, asks for the
    /// stored tasks.
    pub fn initialize(&mut self, width: u16, height: u16) -> Option<Effect> {
        self.size = Some((width, height));
        if self.load_state != LoadState::Pending {
            return None;
        }
        tracing::debug!("Loading board for {}x{} terminal", width, height);
        self.load_state = LoadState::Loading;
        Some(Effect::LoadTasks)
    }

    /// Buckets loaded tasks by status, keeping query order. A failed load
    /// leaves the board empty and is not retried.
    pub fn apply_loaded(&mut self, result: KanbanResult<Vec<Task>>) {
        match result {
            Ok(tasks) => {
                tracing::debug!("Loaded {} tasks", tasks.len());
                for task in tasks {
                    self.insert_task(task);
                }
            }
            Err(e) => {
                tracing::error!("Board starts empty, load failed: {}", e);
                self.banner = Some(Banner::error(format!("Could not load tasks: {}", e)));
            }
        }
        self.load_state = LoadState::Loaded;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Moves the selected task one stage forward, appending it to the end
    /// of the destination column.
    pub fn move_selected_to_next(&mut self) -> Option<Effect> {
        let Some(mut task) = self.focused_list_mut().remove_selected() else {
            tracing::debug!("Move ignored: no selection in {}", self.focus);
            return None;
        };
        let status = task.advance();
        let id = task.id;
        tracing::debug!("Moving task {} to {}", id, status);
        self.insert_task(task);
        Some(Effect::UpdateStatus { id, status })
    }

    pub fn delete_selected(&mut self) -> Option<Effect> {
        let Some(task) = self.focused_list_mut().remove_selected() else {
            tracing::debug!("Delete ignored: no selection in {}", self.focus);
            return None;
        };
        tracing::debug!("Deleting task {}", task.id);
        Some(Effect::DeleteTask(task.id))
    }

    pub fn insert_task(&mut self, task: Task) {
        self.lists[task.status.index()].push(task);
    }

    pub fn report_failure(&mut self, failure: StoreFailure) {
        self.banner = Some(Banner::error(failure.summary()));
    }

    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &KeyMap) -> Update {
        match keymap.action_for(key) {
            Some(KeyAction::Quit) => return Update::transition(Transition::Quit),
            Some(KeyAction::AddTask) => return Update::transition(Transition::ToForm(self.focus)),
            Some(KeyAction::MoveTaskNext) => return Update::effect(self.move_selected_to_next()),
            Some(KeyAction::DeleteTask) => return Update::effect(self.delete_selected()),
            Some(KeyAction::Left) => self.focus_prev(),
            Some(KeyAction::Right) => self.focus_next(),
            Some(KeyAction::Up) => self.focused_list_mut().select_prev(),
            Some(KeyAction::Down) => self.focused_list_mut().select_next(),
            Some(KeyAction::Help) => self.show_full_help = !self.show_full_help,
            None => {
                self.focused_list_mut().navigate(key);
            }
        }
        Update::none()
    }

    pub fn update(&mut self, message: Message, keymap: &KeyMap) -> Update {
        match message {
            Message::Resize(width, height) => Update::effect(self.initialize(width, height)),
            Message::Key(key) => self.handle_key(&key, keymap),
            Message::TasksLoaded(result) => {
                self.apply_loaded(result);
                Update::none()
            }
            Message::TaskCreated(task) => {
                self.insert_task(task);
                Update::none()
            }
            Message::StoreFailed(failure) => {
                self.report_failure(failure);
                Update::none()
            }
            Message::Tick => {
                if self.banner.as_ref().is_some_and(|b| b.is_expired(BANNER_TTL)) {
                    self.banner = None;
                }
                Update::none()
            }
            // Left over from a closed form
            Message::Blink(_) => Update::none(),
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}
