use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Indexed(62);
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;
pub const SELECTED_TEXT: Color = Color::Indexed(170);

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HELP_TEXT: Color = Color::Indexed(241);
pub const ERROR_COLOR: Color = Color::Red;
