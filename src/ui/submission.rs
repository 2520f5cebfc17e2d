//! Submission detail panel

use crate::app::App;
use crate::state::{review_state_label, ReviewState};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(submission) = app.state.current_submission() else {
        let message = if app.state.loading {
            "Loading submission…"
        } else {
            "Submission could not be loaded."
        };
        let placeholder = Paragraph::new(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let review_color = match submission.review_state {
        Some(ReviewState::Approved) => Color::Green,
        Some(ReviewState::HasIssues) => Color::Yellow,
        Some(ReviewState::Rejected) => Color::Red,
        Some(ReviewState::Edited) => Color::Magenta,
        None => Color::White,
    };

    let lines = vec![
        field_line("Instance", submission.id.clone(), Style::default()),
        field_line(
            "Review",
            review_state_label(submission.review_state).to_string(),
            Style::default()
                .fg(review_color)
                .add_modifier(Modifier::BOLD),
        ),
        field_line(
            "Submitter",
            submission.submitter_id().unwrap_or_else(|| "—".to_string()),
            Style::default(),
        ),
        field_line(
            "Submitted",
            format_timestamp(submission.created_at()),
            Style::default(),
        ),
        field_line(
            "Updated",
            format_timestamp(submission.updated_at()),
            Style::default(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, style),
    ])
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}
