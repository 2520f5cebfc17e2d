//! UI module for rendering the TUI

mod audits;
mod components;
mod layout;
mod submission;

use crate::app::App;
use components::{render_error_dialog, render_review_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header, app);
    submission::draw(frame, screen.detail, app);
    audits::draw(frame, screen.audits, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Overlays: the error dialog stays on top of the review dialog
    if let Some(form) = app.state.review_modal.form() {
        render_review_dialog(frame, form);
    }
    if let Some(alert) = app.state.current_error() {
        render_error_dialog(frame, alert, app.state.queued_errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClientTrait;
    use crate::state::{AlertSource, Submission, SubmissionIdentity};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use serde_json::json;
    use std::sync::Arc;

    fn app() -> App {
        let identity = SubmissionIdentity::new("1", "a b", "c d");
        let mut app = App::new(Arc::new(MockApiClientTrait::new()), identity.clone());
        let submission: Submission = serde_json::from_value(json!({
            "instanceId": "c d",
            "reviewState": "hasIssues",
            "submitterId": 1
        }))
        .unwrap();
        app.state.submissions.insert(identity, submission);
        app.state.audits.replace(
            serde_json::from_value(json!([
                { "action": "submission.create", "notes": "first note" }
            ]))
            .unwrap(),
        );
        app.state.loading = false;
        app
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draws_detail_and_history() {
        let screen = render(&app());
        assert!(screen.contains("Has Issues"));
        assert!(screen.contains("History (1)"));
        assert!(screen.contains("Submitted"));
        assert!(screen.contains("first note"));
    }

    #[test]
    fn test_draws_review_dialog_with_focused_selection() {
        let mut app = app();
        app.open_review_modal();
        let screen = render(&app);

        assert!(screen.contains("Update Review State"));
        assert!(screen.contains("▸ (•) Has Issues"));
        assert!(screen.contains("( ) Approved"));
        assert!(screen.contains("Cancel"));
    }

    #[test]
    fn test_update_button_shows_progress_while_submitting() {
        let mut app = app();
        app.open_review_modal();
        app.state.review_modal.begin_submit().unwrap();
        let screen = render(&app);
        assert!(screen.contains("Updating…"));
    }

    #[test]
    fn test_error_dialog_on_top() {
        let mut app = app();
        app.open_review_modal();
        app.push_error(AlertSource::Review, "Something broke");
        let screen = render(&app);
        assert!(screen.contains("Review state not updated"));
        assert!(screen.contains("Something broke"));
        assert!(!screen.contains("more error"));
    }

    #[test]
    fn test_error_dialog_titles_follow_source() {
        let mut app = app();
        app.push_error(AlertSource::Load, "Failed to load audit log: timeout");
        app.push_error(AlertSource::Review, "Not allowed.");

        let screen = render(&app);
        assert!(screen.contains("Could not load submission"));
        assert!(screen.contains("Failed to load audit log: timeout"));
        assert!(screen.contains("1 more error queued"));
        assert!(!screen.contains("Not allowed."));

        app.state.dismiss_error();
        let screen = render(&app);
        assert!(screen.contains("Review state not updated"));
        assert!(screen.contains("Not allowed."));
        assert!(!screen.contains("more error"));
    }
}
