//! Color schemes and shared text styles.
//!
//! Two schemes exist: `light` leans on the terminal's default colors,
//! `dark` forces a black background. Components receive the active
//! scheme from the renderer each frame, so toggling dark mode is just a
//! state flip.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub error: Color,
    pub selection_bg: Color,
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            text_dim: Color::DarkGray,
            accent: Color::Blue,
            error: Color::Red,
            selection_bg: Color::DarkGray,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::LightRed,
            selection_bg: Color::DarkGray,
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stripe(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::DIM)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn active_header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.text_dim)
        }
    }
}
