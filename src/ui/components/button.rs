//! Dialog buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// What pressing the button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Sends the change
    Confirm,
    /// Leaves the dialog without sending anything
    Dismiss,
}

impl ButtonRole {
    fn accent(self) -> Color {
        match self {
            Self::Confirm => Color::Green,
            Self::Dismiss => Color::Cyan,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    role: ButtonRole,
    focused: bool,
    enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, role: ButtonRole) -> Self {
        Self {
            label,
            role,
            focused: false,
            enabled: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// A disabled button is greyed out and never shows focus
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn border_style(&self) -> Style {
        if !self.enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(self.role.accent())
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn label_style(&self) -> Style {
        if !self.enabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else if self.focused {
            Style::default()
                .fg(self.role.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());
        let paragraph = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(self.label_style())
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
