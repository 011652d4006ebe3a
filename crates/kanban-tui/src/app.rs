use crate::board::BoardModel;
use crate::effects::{Effect, EffectRunner, BLINK_INTERVAL};
use crate::events::EventHandler;
use crate::form::FormModel;
use crate::keybindings::KeyMap;
use crate::message::{Message, Transition, Update};
use crate::ui;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kanban_core::KanbanResult;
use kanban_persistence::TaskStore;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Which model receives input. The board survives every switch; a form
/// exists only while it is active.
#[derive(Debug, Clone)]
pub enum Mode {
    Board,
    Form(FormModel),
}

pub struct App {
    pub board: BoardModel,
    pub mode: Mode,
    pub keymap: KeyMap,
    pub should_quit: bool,
    next_form_id: u64,
}

impl App {
    pub fn new() -> Self {
        Self::with_keymap(KeyMap::default())
    }

    pub fn with_keymap(keymap: KeyMap) -> Self {
        Self {
            board: BoardModel::new(),
            mode: Mode::Board,
            keymap,
            should_quit: false,
            next_form_id: 0,
        }
    }

    pub fn is_board_active(&self) -> bool {
        matches!(self.mode, Mode::Board)
    }

    pub fn form(&self) -> Option<&FormModel> {
        match &self.mode {
            Mode::Form(form) => Some(form),
            Mode::Board => None,
        }
    }

    /// Handles one message to completion and returns the effects the
    /// driver has to run.
    pub fn dispatch(&mut self, message: Message) -> Vec<Effect> {
        let update = match (&mut self.mode, message) {
            (_, message) if message.is_for_board() => self.board.update(message, &self.keymap),
            (Mode::Form(form), message) => form.update(message, &self.keymap),
            (Mode::Board, message) => self.board.update(message, &self.keymap),
        };
        self.apply(update)
    }

    fn apply(&mut self, update: Update) -> Vec<Effect> {
        let mut effects: Vec<Effect> = update.effect.into_iter().collect();

        match update.transition {
            Transition::Stay => {}
            Transition::Quit => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
            Transition::ToForm(status) => {
                self.next_form_id += 1;
                let mut form = FormModel::new(self.next_form_id, status);
                tracing::debug!("Opening form {} for {}", form.id(), status);
                let init = form.init();
                self.mode = Mode::Form(form);
                effects.extend(self.apply(init));
            }
            Transition::ToBoard(submitted) => {
                self.mode = Mode::Board;
                if let Some(task) = submitted {
                    effects.push(Effect::CreateTask(task));
                }
            }
        }

        effects
    }

    pub async fn run(&mut self, store: Arc<dyn TaskStore>, tick_rate: Duration) -> KanbanResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(tick_rate);
        let runner = EffectRunner::start(store, events.sender(), BLINK_INTERVAL);

        let result = self.event_loop(&mut terminal, &mut events, &runner).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
        runner: &EffectRunner,
    ) -> KanbanResult<()> {
        // Crossterm only reports resizes, so the first size is read directly
        let size = terminal.size()?;
        runner.dispatch_all(self.dispatch(Message::Resize(size.width, size.height)));

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(message) => runner.dispatch_all(self.dispatch(message)),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
