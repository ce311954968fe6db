//! Owns the page's components and pushes application state into them
//! before each draw. Components keep their interaction state (cursor,
//! dropdown, sort) to themselves; everything the page owns flows down
//! through the `set_*` calls here.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::constants::{STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crate::ui::app_state::{AppState, Focus};
use crate::ui::components::{
    Component, data_table::DataTable, select_field::SelectField, styles::ColorScheme,
};

pub struct Renderer {
    select: SelectField,
    table: DataTable,
}

impl Renderer {
    pub fn new(select: SelectField, table: DataTable) -> Self {
        Self { select, table }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let scheme = ColorScheme::for_dark_mode(state.ui.dark_mode);
        f.render_widget(Block::default().style(scheme.base()), f.area());

        self.select.set_scheme(scheme);
        self.select.set_focused(state.focus == Focus::Select);
        self.select.set_value(state.selected_fruit.clone());
        self.select.set_error(if state.selected_fruit.is_none() {
            Some("Please pick a fruit".to_string())
        } else {
            None
        });
        self.table.set_scheme(scheme);
        self.table.set_focused(state.focus == Focus::Table);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_BAR_HEIGHT),
                Constraint::Length(self.select.desired_height()),
                Constraint::Min(5),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Controls demo", scheme.title()),
            Span::styled("  select field + sortable table", scheme.dimmed()),
        ]));
        f.render_widget(title, chunks[0]);

        self.select.render(f, chunks[1]);
        self.table.render(f, chunks[2]);

        let status = match &state.ui.message {
            Some(message) => {
                Paragraph::new(message.clone()).style(scheme.title())
            }
            None => Paragraph::new(
                "Tab: switch focus | s: sort column | d: dark mode | q: quit",
            )
            .style(scheme.dimmed()),
        };
        f.render_widget(status, chunks[3]);
    }

    pub fn get_select_mut(&mut self) -> &mut SelectField {
        &mut self.select
    }

    pub fn get_table_mut(&mut self) -> &mut DataTable {
        &mut self.table
    }
}
