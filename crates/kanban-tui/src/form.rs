use crate::dialog::{handle_field_input, FieldAction};
use crate::effects::Effect;
use crate::keybindings::KeyMap;
use crate::message::{Message, Transition, Update};
use crossterm::event::KeyEvent;
use kanban_core::InputState;
use kanban_domain::{NewTask, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// Identifies the blink timer of one field of one form, so timers that
/// outlive their field are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkToken {
    pub form_id: u64,
    pub field: FormField,
}

/// Two-step capture of a new task: the title first, then the description.
#[derive(Debug, Clone)]
pub struct FormModel {
    id: u64,
    target_status: TaskStatus,
    title: InputState,
    description: InputState,
    active: FormField,
    cursor_visible: bool,
}

impl FormModel {
    pub fn new(id: u64, target_status: TaskStatus) -> Self {
        let mut title = InputState::with_placeholder("Title");
        title.focus();
        Self {
            id,
            target_status,
            title,
            description: InputState::with_placeholder("Description"),
            active: FormField::Title,
            cursor_visible: true,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target_status(&self) -> TaskStatus {
        self.target_status
    }

    pub fn active_field(&self) -> FormField {
        self.active
    }

    pub fn title(&self) -> &InputState {
        &self.title
    }

    pub fn description(&self) -> &InputState {
        &self.description
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn blink_token(&self) -> BlinkToken {
        BlinkToken {
            form_id: self.id,
            field: self.active,
        }
    }

    /// First update after the form becomes active: starts the cursor blink.
    pub fn init(&mut self) -> Update {
        self.cursor_visible = true;
        Update::effect(Some(Effect::Blink(self.blink_token())))
    }

    pub fn submission(&self) -> NewTask {
        NewTask::new(
            self.target_status,
            self.title.value(),
            self.description.value(),
        )
    }

    fn active_input_mut(&mut self) -> &mut InputState {
        match self.active {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    fn confirm(&mut self) -> Update {
        match self.active {
            FormField::Title => {
                self.title.blur();
                self.description.focus();
                self.active = FormField::Description;
                tracing::debug!("Form {} moved to description", self.id);
                self.init()
            }
            FormField::Description => {
                let task = self.submission();
                tracing::debug!("Form {} submitted {:?}", self.id, task.title);
                Update::transition(Transition::ToBoard(Some(task)))
            }
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, keymap: &KeyMap) -> Update {
        if keymap.is_quit(key) {
            return Update::transition(Transition::Quit);
        }
        match handle_field_input(self.active_input_mut(), key) {
            FieldAction::Confirm => self.confirm(),
            FieldAction::Cancel => {
                tracing::debug!("Form {} cancelled", self.id);
                Update::transition(Transition::ToBoard(None))
            }
            FieldAction::None => {
                self.cursor_visible = true;
                Update::none()
            }
        }
    }

    pub fn update(&mut self, message: Message, keymap: &KeyMap) -> Update {
        match message {
            Message::Key(key) => self.handle_key(&key, keymap),
            Message::Blink(token) if token == self.blink_token() => {
                self.cursor_visible = !self.cursor_visible;
                Update::effect(Some(Effect::Blink(token)))
            }
            _ => Update::none(),
        }
    }
}
