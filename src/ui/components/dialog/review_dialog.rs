//! Review state dialog: radio group, notes box and Update/Cancel buttons

use super::base::{centered_rect, dialog_block};
use crate::state::{FocusedControl, ReviewFocus, ReviewForm, ReviewSelection};
use crate::ui::components::{Button, ButtonRole, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 19;
const NOTES_HEIGHT: u16 = 5;

/// Render the review dialog for an open form
pub fn render_review_dialog(frame: &mut Frame, form: &ReviewForm) {
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog_area);

    let block = dialog_block(Color::Cyan);
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + blank
            Constraint::Length(ReviewSelection::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(NOTES_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Update Review State",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    draw_review_states(frame, chunks[1], form);
    draw_notes(frame, chunks[3], form);
    draw_buttons(frame, chunks[4], form);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
        Span::styled(" update  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(hints, chunks[5]);
}

fn draw_review_states(frame: &mut Frame, area: Rect, form: &ReviewForm) {
    let focused = form.focused_control();
    let lines: Vec<Line> = ReviewSelection::ALL
        .iter()
        .map(|&option| {
            let is_checked = form.selection == option;
            let is_focused = focused == FocusedControl::ReviewState(option);
            let prefix = if is_focused { "▸ " } else { "  " };
            let mark = if is_checked { "(•)" } else { "( )" };
            let style = if is_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if is_checked {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(
                format!("{prefix}{mark} {}", option.label()),
                style,
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_notes(frame: &mut Frame, area: Rect, form: &ReviewForm) {
    let is_active = form.focus() == ReviewFocus::Notes;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = form.notes.as_text();
    let mut lines: Vec<Line> = text.split('\n').map(|l| Line::from(l.to_string())).collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    } else if text.is_empty() {
        lines = vec![Line::from(Span::styled(
            "(optional)",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    // Keep the end of the notes (where typing happens) in view
    let visible = NOTES_HEIGHT.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let block = Block::default()
        .title(format!(" {} ", form.notes.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ReviewForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    let focused = form.focused_control();
    let update_label = if form.awaiting_response() {
        "Updating…"
    } else {
        "Update"
    };
    Button::new(update_label, ButtonRole::Confirm)
        .focused(focused == FocusedControl::UpdateButton)
        .enabled(!form.awaiting_response())
        .render(frame, chunks[0]);
    Button::new("Cancel", ButtonRole::Dismiss)
        .focused(focused == FocusedControl::CancelButton)
        .render(frame, chunks[2]);
}
