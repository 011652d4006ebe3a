pub mod app;
pub mod board;
pub mod components;
pub mod dialog;
pub mod effects;
pub mod events;
pub mod form;
pub mod keybindings;
pub mod message;
pub mod task_list;
pub mod theme;
pub mod ui;

pub use app::App;
