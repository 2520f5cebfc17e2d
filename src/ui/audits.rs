//! Audit list view

use super::submission::format_timestamp;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let audits = &app.state.audits;
    let block = Block::default()
        .title(format!(" History ({}) ", audits.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if audits.is_empty() {
        let placeholder = ListItem::new(Span::styled(
            "No history yet.",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(List::new(vec![placeholder]).block(block), area);
        return;
    }

    let items: Vec<ListItem> = audits
        .entries()
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{}  ", format_timestamp(entry.logged_at)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.label(), Style::default().fg(Color::White)),
            ])];
            if let Some(actor_id) = entry.actor_id {
                lines[0].spans.push(Span::styled(
                    format!("  by #{actor_id}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(notes) = entry.notes.as_deref().filter(|n| !n.is_empty()) {
                for note_line in notes.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("    {note_line}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
