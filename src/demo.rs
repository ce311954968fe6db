//! Interactive demo shell: terminal lifecycle, event loop, and key
//! routing between the two controls.

use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use crate::data::Dataset;
use crate::ui::app_state::{AppState, Focus};
use crate::ui::commands::Command;
use crate::ui::components::Component;
use crate::ui::components::data_table::{DataTable, TableRow};
use crate::ui::components::select_field::SelectField;
use crate::ui::events::Message;
use crate::ui::renderer::Renderer;

pub struct DemoApp {
    state: AppState,
    renderer: Renderer,
    last_ctrl_c: Option<Instant>,
    message_timer: Option<(Instant, Duration)>,
}

impl DemoApp {
    pub fn new(dataset: Dataset, dark_mode: bool) -> Self {
        let select = SelectField::controlled(dataset.options)
            .label("Favorite fruit")
            .required()
            .helper_text("Enter opens the list, arrows move, Enter commits");
        let table = DataTable::new(dataset.columns)
            .rows(dataset.rows)
            .caption("People")
            .empty_message("No people to show")
            .activatable()
            .row_key(|row: &TableRow| {
                row.get("name").map(|v| v.display()).unwrap_or_default()
            });
        Self {
            state: AppState::new(dark_mode),
            renderer: Renderer::new(select, table),
            last_ctrl_c: None,
            message_timer: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_app(&mut terminal);
        Self::cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(out);
        Ok(Terminal::new(backend)?)
    }

    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.renderer.render(f, &self.state))?;

            if let Some((started, delay)) = self.message_timer
                && started.elapsed() >= delay
            {
                self.message_timer = None;
                self.handle_message(Message::ClearStatus);
            }

            if event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))?
                && let Event::Key(key) = event::read()?
                && self.handle_input(key)
            {
                return Ok(());
            }
        }
    }

    /// Routes one key press. Returns true when the app should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last) = self.last_ctrl_c
                && last.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS)
            {
                return true;
            }
            self.last_ctrl_c = Some(Instant::now());
            self.handle_message(Message::SetStatus(
                "Press Ctrl+C again to exit".to_string(),
            ));
            return false;
        }

        // While the dropdown is open every key belongs to the select
        // field, so Tab or q cannot yank focus mid-choice.
        let dropdown_open =
            self.state.focus == Focus::Select && self.renderer.get_select_mut().is_open();
        if !dropdown_open {
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Tab => {
                    self.renderer.get_select_mut().close();
                    self.handle_message(Message::FocusNext);
                    return false;
                }
                KeyCode::Char('d') => {
                    self.handle_message(Message::ToggleDarkMode);
                    return false;
                }
                _ => {}
            }
        }

        let message = match self.state.focus {
            Focus::Select => self.renderer.get_select_mut().handle_key(key),
            Focus::Table => self.renderer.get_table_mut().handle_key(key),
        };
        if let Some(message) = message {
            self.handle_message(message);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleClearMessage(delay_ms) => {
                self.message_timer = Some((Instant::now(), Duration::from_millis(delay_ms)));
            }
        }
    }
}
