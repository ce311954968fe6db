//! Demo page state.
//!
//! The page owns the select field's value (the field runs controlled),
//! the dark-mode flag, and which control has focus. `update` folds a
//! component [`Message`] into the state and returns the side effect the
//! shell should execute.

use crate::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::ui::commands::Command;
use crate::ui::components::sorting::CellValue;
use crate::ui::events::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Select,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Select => Focus::Table,
            Focus::Table => Focus::Select,
        }
    }
}

pub struct UiState {
    pub message: Option<String>,
    pub dark_mode: bool,
}

pub struct AppState {
    pub focus: Focus,
    pub selected_fruit: Option<String>,
    pub ui: UiState,
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            focus: Focus::Select,
            selected_fruit: None,
            ui: UiState {
                message: None,
                dark_mode,
            },
        }
    }

    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::SelectionChanged(value) => {
                self.ui.message = Some(match &value {
                    Some(v) => format!("Selected: {v}"),
                    None => "Selection cleared".to_string(),
                });
                self.selected_fruit = value;
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::RowActivated(row) => {
                let name = row
                    .get("name")
                    .unwrap_or(&CellValue::Null)
                    .display();
                self.ui.message = Some(format!("Activated: {name}"));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::FocusNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Message::ToggleDarkMode => {
                self.ui.dark_mode = !self.ui.dark_mode;
                Command::None
            }
            Message::SetStatus(text) => {
                self.ui.message = Some(text);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }
}
