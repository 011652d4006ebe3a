use crate::app::{App, Mode};
use crate::board::{BoardModel, COLUMN_DIVISOR};
use crate::form::{FormField, FormModel};
use crate::keybindings::{KeyMap, Keybinding};
use crate::task_list::TaskList;
use crate::theme::*;
use kanban_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const MIN_COLUMN_HEIGHT: u16 = 5;
const FIELD_HEIGHT: u16 = 3;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    match &app.mode {
        Mode::Board => render_board(&app.board, &app.keymap, frame, area),
        Mode::Form(form) => render_form(form, &app.keymap, frame, area),
    }
}

fn render_board(board: &BoardModel, keymap: &KeyMap, frame: &mut Frame, area: Rect) {
    if !board.is_loaded() {
        frame.render_widget(Paragraph::new("loading..."), area);
        return;
    }

    let (column_width, column_height) = match board.size() {
        Some(_) => board.column_size(),
        None => (area.width / COLUMN_DIVISOR, area.height / 2),
    };
    let help = if board.show_full_help() {
        keymap.full_help()
    } else {
        keymap.short_help()
    };
    let help_height = if board.show_full_help() {
        help.len() as u16
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(column_height.max(MIN_COLUMN_HEIGHT)),
            Constraint::Length(help_height),
            Constraint::Min(0),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(column_width); 3])
        .split(chunks[0]);

    for (list, column_area) in board.lists().iter().zip(columns.iter()) {
        render_column(list, list.status() == board.focus(), frame, *column_area);
    }

    render_help(&help, board.show_full_help(), frame, chunks[1]);

    if let Some(banner) = board.banner() {
        banner.render(frame, area);
    }
}

fn render_column(list: &TaskList, focused: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", list.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            focused_border()
        } else {
            unfocused_border()
        });

    if list.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("No items", label_text()))).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let title_style = if list.selected_index() == Some(idx) {
                selected_item(focused)
            } else {
                normal_text()
            };
            let title = if task.title.is_empty() {
                "(untitled)"
            } else {
                task.title.as_str()
            };
            ListItem::new(vec![
                Line::from(Span::styled(title, title_style)),
                Line::from(Span::styled(task.description.as_str(), label_text())),
            ])
        })
        .collect();

    let mut widget = List::new(items).block(block);
    if focused {
        widget = widget.highlight_symbol("│ ");
    }

    let mut state = ListState::default().with_selected(list.selected_index());
    frame.render_stateful_widget(widget, area, &mut state);
}

fn render_help(bindings: &[&Keybinding], expanded: bool, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = if expanded {
        bindings
            .iter()
            .map(|binding| {
                Line::from(Span::styled(
                    format!("{:<10} {}", binding.key, binding.description),
                    help_text(),
                ))
            })
            .collect()
    } else {
        let text = bindings
            .iter()
            .map(|binding| format!("{} {}", binding.key, binding.description))
            .collect::<Vec<_>>()
            .join(" • ");
        vec![Line::from(Span::styled(text, help_text()))]
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_form(form: &FormModel, keymap: &KeyMap, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let header = format!("New task in {}", form.target_status());
    frame.render_widget(Paragraph::new(Line::from(Span::styled(header, label_text()))), chunks[0]);

    let title_focused = form.active_field() == FormField::Title;
    render_field(form.title(), title_focused, frame, chunks[1]);
    render_field(form.description(), !title_focused, frame, chunks[2]);

    let quit = keymap
        .binding(crate::keybindings::KeyAction::Quit)
        .map(|binding| format!(" • {} quit", binding.key))
        .unwrap_or_default();
    let hint = format!("enter confirm • esc cancel{}", quit);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(hint, help_text()))), chunks[3]);

    if form.cursor_visible() {
        let (input, field_area) = if title_focused {
            (form.title(), chunks[1])
        } else {
            (form.description(), chunks[2])
        };
        let max_x = field_area.right().saturating_sub(2);
        let x = (field_area.x + 1 + input.cursor_column() as u16).min(max_x);
        frame.set_cursor_position(Position::new(x, field_area.y + 1));
    }
}

fn render_field(input: &InputState, focused: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", input.placeholder()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            focused_border()
        } else {
            unfocused_border()
        });

    let text = if input.is_empty() {
        Span::styled(input.placeholder(), label_text())
    } else {
        Span::styled(input.value(), normal_text())
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}
