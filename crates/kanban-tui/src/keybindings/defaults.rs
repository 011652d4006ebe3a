use super::{KeyAction, KeyMap, KeyTrigger, Keybinding};
use crossterm::event::KeyCode;

pub fn default_keymap() -> KeyMap {
    KeyMap::new(vec![
        Keybinding::new(
            KeyAction::Up,
            vec![KeyTrigger::plain(KeyCode::Up)],
            "↑",
            "move up",
        ),
        Keybinding::new(
            KeyAction::Down,
            vec![KeyTrigger::plain(KeyCode::Down)],
            "↓",
            "move down",
        ),
        Keybinding::new(
            KeyAction::Left,
            vec![KeyTrigger::plain(KeyCode::Left)],
            "←",
            "move left",
        ),
        Keybinding::new(
            KeyAction::Right,
            vec![KeyTrigger::plain(KeyCode::Right)],
            "→",
            "move right",
        ),
        Keybinding::new(
            KeyAction::MoveTaskNext,
            vec![KeyTrigger::plain(KeyCode::Enter)],
            "Enter",
            "move task to the next stage",
        ),
        Keybinding::new(
            KeyAction::AddTask,
            vec![KeyTrigger::plain(KeyCode::Char('n'))],
            "n",
            "add task",
        ),
        Keybinding::new(
            KeyAction::DeleteTask,
            vec![KeyTrigger::plain(KeyCode::Char('d'))],
            "d",
            "delete task",
        ),
        Keybinding::new(
            KeyAction::Help,
            vec![KeyTrigger::plain(KeyCode::Char('?'))],
            "?",
            "toggle help",
        ),
        Keybinding::new(
            KeyAction::Quit,
            vec![KeyTrigger::plain(KeyCode::Char('q')), KeyTrigger::ctrl('c')],
            "q/ctrl+c",
            "quit",
        ),
    ])
}
