//! Sortable data table component.
//!
//! Columns and rows are caller-supplied; the table owns its sort state,
//! row cursor, and scroll window. Pressing `s` on a sortable column
//! cycles that column through ascending, descending, and back to the
//! unsorted input order. Sorting only ever reorders a derived view; the
//! rows handed in by the caller are never mutated.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde::{Deserialize, Serialize};

use super::sorting::{CellValue, SortState, sort_rows};
use super::styles::ColorScheme;
use crate::constants::{MIN_COLUMN_WIDTH, PAGE_SIZE};
use crate::ui::events::Message;

/// Column descriptor built fluently:
/// `Column::new("age", "Age").sortable().align(Alignment::Right)`.
#[derive(Clone, Debug)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub align: Alignment,
    render: Option<fn(&CellValue, &TableRow) -> String>,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            align: Alignment::Left,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Custom cell renderer. The whole row is passed alongside the cell
    /// so derived columns can combine fields.
    pub fn render_with(mut self, render: fn(&CellValue, &TableRow) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn cell_text(&self, row: &TableRow) -> String {
        let value = row.get(&self.key).unwrap_or(&CellValue::Null);
        match self.render {
            Some(render) => render(value, row),
            None => value.display(),
        }
    }
}

/// An open map from column key to cell value. Keys absent from a row are
/// treated as null everywhere (display and ordering alike).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow {
    cells: HashMap<String, CellValue>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }
}

pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<TableRow>,
    caption: Option<String>,
    empty_message: String,
    sort: SortState,
    active_column: usize,
    cursor: usize,
    scroll_offset: usize,
    activatable: bool,
    row_key: Option<fn(&TableRow) -> String>,
    scheme: ColorScheme,
    focused: bool,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            caption: None,
            empty_message: "No data".to_string(),
            sort: SortState::Unsorted,
            active_column: 0,
            cursor: 0,
            scroll_offset: 0,
            activatable: false,
            row_key: None,
            scheme: ColorScheme::light(),
            focused: false,
        }
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn initial_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Rows emit [`Message::RowActivated`] on Enter when set.
    pub fn activatable(mut self) -> Self {
        self.activatable = true;
        self
    }

    /// Stable identity for a row, used when logging activations.
    pub fn row_key(mut self, row_key: fn(&TableRow) -> String) -> Self {
        self.row_key = Some(row_key);
        self
    }

    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.clamp_cursor();
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows in display order for the current sort state.
    pub fn visible_rows(&self) -> Vec<TableRow> {
        sort_rows(&self.rows, &self.sort)
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn cycle_active_sort(&mut self) {
        let Some(column) = self.columns.get(self.active_column) else {
            return;
        };
        if !column.sortable {
            return;
        }
        self.sort = self.sort.cycle(&column.key);
        self.clamp_cursor();
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() as isize - 1;
        let next = (self.cursor as isize + delta).clamp(0, last);
        self.cursor = next as usize;
    }

    fn activate_cursor_row(&mut self) -> Option<Message> {
        if !self.activatable || self.rows.is_empty() {
            return None;
        }
        let row = self.visible_rows().into_iter().nth(self.cursor)?;
        if let Some(row_key) = self.row_key {
            tracing::debug!(row = %row_key(&row), "row activated");
        }
        Some(Message::RowActivated(row))
    }

    fn adjust_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor + 1 - visible_height;
        }
    }

    fn column_width(&self, area_width: u16) -> u16 {
        let count = self.columns.len().max(1) as u16;
        (area_width / count).max(MIN_COLUMN_WIDTH)
    }

    fn header_line(&self, width: u16) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.columns.len());
        for (i, column) in self.columns.iter().enumerate() {
            let mut label = column.label.clone();
            if self.sort.key() == Some(column.key.as_str()) {
                label.push_str(match self.sort {
                    SortState::Ascending(_) => " ▲",
                    SortState::Descending(_) => " ▼",
                    SortState::Unsorted => "",
                });
            }
            let mut style = self.scheme.header();
            if self.focused && i == self.active_column {
                style = self.scheme.active_header();
            }
            spans.push(Span::styled(pad(&label, width, column.align), style));
        }
        Line::from(spans)
    }

    fn row_line(&self, row: &TableRow, index: usize, width: u16) -> Line<'static> {
        let style = if index == self.cursor && self.focused {
            self.scheme.selected()
        } else if index % 2 == 1 {
            self.scheme.stripe()
        } else {
            self.scheme.normal()
        };
        let spans: Vec<Span<'static>> = self
            .columns
            .iter()
            .map(|column| Span::styled(pad(&column.cell_text(row), width, column.align), style))
            .collect();
        Line::from(spans)
    }

    fn title(&self) -> String {
        let caption = self.caption.as_deref().unwrap_or("Table");
        if self.rows.is_empty() {
            caption.to_string()
        } else {
            format!("{} ({}/{})", caption, self.cursor + 1, self.rows.len())
        }
    }
}

impl super::Component for DataTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title())
            .border_style(self.scheme.border(self.focused))
            .style(self.scheme.base());

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .style(self.scheme.dimmed())
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        // 2 border rows + 1 header row
        let visible_height = area.height.saturating_sub(3) as usize;
        self.adjust_scroll(visible_height);

        let width = self.column_width(area.width.saturating_sub(2));
        let view = self.visible_rows();
        let mut lines = vec![self.header_line(width)];
        lines.extend(
            view.iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(visible_height)
                .map(|(i, row)| self.row_line(row, i, width)),
        );

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Left => {
                self.active_column = self.active_column.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.active_column + 1 < self.columns.len() {
                    self.active_column += 1;
                }
                None
            }
            KeyCode::Char('s') => {
                self.cycle_active_sort();
                None
            }
            KeyCode::Up => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Down => {
                self.move_cursor(1);
                None
            }
            KeyCode::PageUp => {
                self.move_cursor(-(PAGE_SIZE as isize));
                None
            }
            KeyCode::PageDown => {
                self.move_cursor(PAGE_SIZE as isize);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                if !self.rows.is_empty() {
                    self.cursor = self.rows.len() - 1;
                }
                None
            }
            KeyCode::Enter => self.activate_cursor_row(),
            _ => None,
        }
    }
}

fn pad(text: &str, width: u16, align: Alignment) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    match align {
        Alignment::Left => format!("{truncated:<width$}"),
        Alignment::Center => format!("{truncated:^width$}"),
        Alignment::Right => {
            // keep one trailing space as the column gutter
            let body = width - 1;
            format!("{truncated:>body$} ")
        }
    }
}
