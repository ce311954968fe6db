//! Single-select field with a dropdown popup.
//!
//! Value ownership is explicit: a field is constructed either controlled
//! (the caller stores the value and feeds it back down each frame via
//! [`SelectField::set_value`]) or uncontrolled (the field stores its own
//! value, seeded with an optional default). Both modes emit
//! [`Message::SelectionChanged`] when the user commits a choice; in
//! controlled mode that message is the only way the value moves.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::styles::ColorScheme;
use crate::constants::{DROPDOWN_MAX_VISIBLE, FIELD_BOX_HEIGHT};
use crate::ui::events::Message;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Disabled options stay visible in the dropdown but can neither be
    /// highlighted nor committed.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Who owns the committed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueMode {
    /// The caller owns the value and pushes it down every frame.
    Controlled { value: Option<String> },
    /// The field owns the value and updates it on commit.
    Uncontrolled { value: Option<String> },
}

pub struct SelectField {
    options: Vec<SelectOption>,
    mode: ValueMode,
    label: Option<String>,
    placeholder: String,
    disabled: bool,
    required: bool,
    error: Option<String>,
    helper_text: Option<String>,
    open: bool,
    // dropdown entry index: 0 is the placeholder, i+1 is options[i]
    highlighted: usize,
    dropdown_scroll: usize,
    scheme: ColorScheme,
    focused: bool,
}

impl SelectField {
    pub fn controlled(options: Vec<SelectOption>) -> Self {
        Self::with_mode(options, ValueMode::Controlled { value: None })
    }

    pub fn uncontrolled(options: Vec<SelectOption>, default_value: Option<&str>) -> Self {
        let value = default_value.map(str::to_string);
        Self::with_mode(options, ValueMode::Uncontrolled { value })
    }

    fn with_mode(options: Vec<SelectOption>, mode: ValueMode) -> Self {
        Self {
            options,
            mode,
            label: None,
            placeholder: "Select...".to_string(),
            disabled: false,
            required: false,
            error: None,
            helper_text: None,
            open: false,
            highlighted: 0,
            dropdown_scroll: 0,
            scheme: ColorScheme::light(),
            focused: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Push the caller-owned value down. Ignored in uncontrolled mode,
    /// where the field is the owner.
    pub fn set_value(&mut self, value: Option<String>) {
        if let ValueMode::Controlled { value: stored } = &mut self.mode {
            *stored = value;
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn value(&self) -> Option<&str> {
        match &self.mode {
            ValueMode::Controlled { value } | ValueMode::Uncontrolled { value } => {
                value.as_deref()
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Label of the committed option, if the value matches one.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value()?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Rows this field wants from the frame layout. Grows while the
    /// dropdown is open so the popup never paints over a neighbor.
    pub fn desired_height(&self) -> u16 {
        let mut height = FIELD_BOX_HEIGHT;
        if self.label.is_some() {
            height += 1;
        }
        if self.open {
            let entries = (self.options.len() + 1).min(DROPDOWN_MAX_VISIBLE);
            height += entries as u16 + 2;
        } else {
            if self.helper_text.is_some() {
                height += 1;
            }
            if self.error.is_some() {
                height += 1;
            }
        }
        height
    }

    fn open_dropdown(&mut self) {
        self.open = true;
        self.highlighted = match self.value() {
            Some(value) => self
                .options
                .iter()
                .position(|o| o.value == value)
                .map_or(0, |i| i + 1),
            None => 0,
        };
    }

    fn move_highlight(&mut self, delta: isize) {
        let count = self.options.len() as isize + 1;
        let mut idx = self.highlighted as isize;
        loop {
            idx += delta;
            if idx < 0 || idx >= count {
                return; // edge reached, keep the current highlight
            }
            let i = idx as usize;
            if i == 0 || !self.options[i - 1].disabled {
                self.highlighted = i;
                return;
            }
        }
    }

    fn commit_highlighted(&mut self) -> Option<Message> {
        let next = if self.highlighted == 0 {
            None
        } else {
            let option = &self.options[self.highlighted - 1];
            if option.disabled {
                return None;
            }
            Some(option.value.clone())
        };
        self.open = false;
        if let ValueMode::Uncontrolled { value } = &mut self.mode {
            *value = next.clone();
        }
        tracing::debug!(value = ?next, "selection committed");
        Some(Message::SelectionChanged(next))
    }

    fn adjust_dropdown_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.highlighted < self.dropdown_scroll {
            self.dropdown_scroll = self.highlighted;
        } else if self.highlighted >= self.dropdown_scroll + visible {
            self.dropdown_scroll = self.highlighted + 1 - visible;
        }
    }

    fn entry_line(&self, index: usize) -> Line<'static> {
        let (text, base) = if index == 0 {
            (self.placeholder.clone(), self.scheme.dimmed())
        } else {
            let option = &self.options[index - 1];
            if option.disabled {
                (format!("{} (disabled)", option.label), self.scheme.dimmed())
            } else {
                (option.label.clone(), self.scheme.normal())
            }
        };
        let style = if index == self.highlighted {
            self.scheme.selected()
        } else {
            base
        };
        Line::from(Span::styled(format!(" {text}"), style))
    }

    fn field_line(&self) -> Line<'static> {
        match self.selected_label() {
            Some(label) => {
                let style = if self.disabled {
                    self.scheme.dimmed()
                } else {
                    self.scheme.normal()
                };
                Line::from(Span::styled(label.to_string(), style))
            }
            None => Line::from(Span::styled(self.placeholder.clone(), self.scheme.dimmed())),
        }
    }

    fn label_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            self.label.clone().unwrap_or_default(),
            self.scheme.label(),
        )];
        if self.required {
            spans.push(Span::styled(" *", self.scheme.error_text()));
        }
        Line::from(spans)
    }
}

impl super::Component for SelectField {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut y = area.y;
        let bottom = area.y + area.height;

        if self.label.is_some() && y < bottom {
            let rect = Rect::new(area.x, y, area.width, 1);
            f.render_widget(Paragraph::new(self.label_line()), rect);
            y += 1;
        }

        let box_height = FIELD_BOX_HEIGHT.min(bottom.saturating_sub(y));
        if box_height > 0 {
            let rect = Rect::new(area.x, y, area.width, box_height);
            let border = if self.error.is_some() {
                self.scheme.error_text()
            } else {
                self.scheme.border(self.focused)
            };
            let field = Paragraph::new(self.field_line())
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(field, rect);
            y += box_height;
        }

        if self.open {
            let entries = self.options.len() + 1;
            let visible = entries.min(DROPDOWN_MAX_VISIBLE);
            self.adjust_dropdown_scroll(visible);
            let height = (visible as u16 + 2).min(bottom.saturating_sub(y));
            if height > 2 {
                let rect = Rect::new(area.x, y, area.width, height);
                let lines: Vec<Line> = (0..entries)
                    .skip(self.dropdown_scroll)
                    .take(visible)
                    .map(|i| self.entry_line(i))
                    .collect();
                let dropdown = Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.scheme.border(true)),
                );
                f.render_widget(dropdown, rect);
            }
            return;
        }

        if let Some(helper) = &self.helper_text
            && y < bottom
        {
            let rect = Rect::new(area.x, y, area.width, 1);
            f.render_widget(
                Paragraph::new(helper.clone()).style(self.scheme.dimmed()),
                rect,
            );
            y += 1;
        }

        if let Some(error) = &self.error
            && y < bottom
        {
            let rect = Rect::new(area.x, y, area.width, 1);
            f.render_widget(
                Paragraph::new(error.clone()).style(self.scheme.error_text()),
                rect,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.disabled {
            return None;
        }
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open_dropdown();
                    None
                }
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up => {
                self.move_highlight(-1);
                None
            }
            KeyCode::Down => {
                self.move_highlight(1);
                None
            }
            KeyCode::Esc => {
                self.open = false;
                None
            }
            KeyCode::Enter => self.commit_highlighted(),
            _ => None,
        }
    }
}
