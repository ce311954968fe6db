pub mod data_table;
pub mod select_field;
pub mod sorting;
pub mod styles;

#[cfg(test)]
mod data_table_test;

use crate::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
