//! Layout components (header, panels, status bar)

use crate::app::App;
use crate::state::ReviewModalState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub detail: Rect,
    pub audits: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, detail panel, audit list and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40), // Submission detail
            Constraint::Min(0),     // Audit list
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        detail: columns[0],
        audits: columns[1],
        status_bar: rows[2],
    }
}

/// Draw the header naming the submission under review
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let identity = &app.state.identity;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Submission ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("project {} ", identity.project_id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("form {} ", identity.xml_form_id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            identity.instance_id.as_str(),
            Style::default().fg(Color::White),
        ),
    ]));
    frame.render_widget(header, area);
}

/// Get context-sensitive hints
fn get_hints(app: &App) -> &'static str {
    if app.state.has_errors() {
        "Enter/Esc: dismiss"
    } else if app.state.review_modal.is_open() {
        "↑↓: select | Tab: next field | Ctrl+S: update | Esc: cancel"
    } else {
        "r: update review state | q: quit"
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if app.state.loading {
        spans.push(Span::styled("Loading… ", Style::default().fg(Color::Yellow)));
    }

    if app.state.review_modal.state() == ReviewModalState::Submitting {
        spans.push(Span::styled(
            "Updating review state… ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
