//! Alert dialog for failed loads and review changes

use super::base::{render_dialog, DialogConfig};
use crate::state::{AlertSource, ErrorAlert};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the front alert of the queue; `queued` counts the ones behind it
pub fn render_error_dialog(frame: &mut Frame, alert: &ErrorAlert, queued: usize) {
    let mut hint = vec![
        key_span("Enter"),
        Span::raw("/"),
        key_span("Esc"),
        Span::raw(" dismiss"),
    ];
    if queued > 0 {
        let noun = if queued == 1 { "error" } else { "errors" };
        hint.push(Span::styled(
            format!("  ({queued} more {noun} queued)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // A failed change leaves the form open behind the alert
    let accent = match alert.source {
        AlertSource::Load => Color::Red,
        AlertSource::Review => Color::LightRed,
    };

    render_dialog(
        frame,
        DialogConfig {
            title: alert.source.title(),
            title_color: accent,
            border_color: accent,
            message: &alert.message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
