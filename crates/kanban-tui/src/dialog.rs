use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kanban_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    None,
    Cancel,
    Confirm,
}

/// Applies an editing key to a text field.
///
/// Enter and Esc are reported to the caller; empty values are accepted.
pub fn handle_field_input(input: &mut InputState, key: &KeyEvent) -> FieldAction {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return FieldAction::None;
    }
    match key.code {
        KeyCode::Esc => FieldAction::Cancel,
        KeyCode::Enter => FieldAction::Confirm,
        KeyCode::Char(c) => {
            input.insert_char(c);
            FieldAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            FieldAction::None
        }
        KeyCode::Delete => {
            input.delete();
            FieldAction::None
        }
        KeyCode::Left => {
            input.move_left();
            FieldAction::None
        }
        KeyCode::Right => {
            input.move_right();
            FieldAction::None
        }
        KeyCode::Home => {
            input.move_home();
            FieldAction::None
        }
        KeyCode::End => {
            input.move_end();
            FieldAction::None
        }
        _ => FieldAction::None,
    }
}
