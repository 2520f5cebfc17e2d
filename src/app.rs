//! Application state and core logic

use crate::api::{ApiClientTrait, ApiError};
use crate::review::{spawn_submit, ReviewCompletion, ReviewRequest};
use crate::state::{AlertSource, AppState, ReviewFocus, SubmissionIdentity};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Status bar message after a successful review change
pub const REVIEW_UPDATED_MESSAGE: &str = "Review state updated.";

/// Window for the second Ctrl+C of a double-tap quit
const CTRL_C_WINDOW: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the submission API
    client: Arc<dyn ApiClientTrait>,
    /// Background review attempts report here
    review_tx: UnboundedSender<ReviewCompletion>,
    review_rx: UnboundedReceiver<ReviewCompletion>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message, cleared on the next key press
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn ApiClientTrait>, identity: SubmissionIdentity) -> Self {
        let (review_tx, review_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(identity),
            client,
            review_tx,
            review_rx,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Fetch the submission and its audit log
    pub async fn load(&mut self) {
        let identity = self.state.identity.clone();

        match self.client.get_submission(&identity).await {
            Ok(submission) => self.state.submissions.insert(identity.clone(), submission),
            Err(e) => {
                tracing::warn!(submission = %identity, error = %e, "failed to load submission");
                self.push_error(
                    AlertSource::Load,
                    format!("Failed to load submission: {}", describe(&e)),
                );
            }
        }

        match self.client.list_audits(&identity).await {
            Ok(audits) => self.state.audits.replace(audits),
            Err(e) => {
                tracing::warn!(submission = %identity, error = %e, "failed to load audit log");
                self.push_error(
                    AlertSource::Load,
                    format!("Failed to load audit log: {}", describe(&e)),
                );
            }
        }

        self.state.loading = false;
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, source: AlertSource, message: impl Into<String>) {
        self.state.push_error(source, message.into());
    }

    /// Register a Ctrl+C press; the second press within the window quits
    pub fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= CTRL_C_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Show the review dialog. Needs a loaded submission.
    pub fn open_review_modal(&mut self) {
        if self.state.current_submission().is_none() {
            self.status_message = Some("Submission not loaded yet".to_string());
            return;
        }
        self.state.set_review_modal_open(true);
    }

    /// Hide the review dialog; an attempt in flight keeps running
    pub fn close_review_modal(&mut self) {
        self.state.set_review_modal_open(false);
    }

    /// Confirm the review dialog and start the update in the background
    pub fn submit_review(&mut self) {
        let ticket = match self.state.review_modal.begin_submit() {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return,
            Err(e) => {
                self.push_error(AlertSource::Review, e.user_message());
                return;
            }
        };

        let request = ReviewRequest {
            identity: self.state.identity.clone(),
            selection: ticket.selection,
            notes: ticket.notes,
        };
        spawn_submit(
            Arc::clone(&self.client),
            ticket.generation,
            request,
            self.review_tx.clone(),
        );
    }

    /// Apply every review completion that has arrived
    pub fn poll_review_completions(&mut self) {
        while let Ok(completion) = self.review_rx.try_recv() {
            self.handle_review_completion(completion);
        }
    }

    /// Wait for the next review completion
    #[cfg(test)]
    pub async fn next_review_completion(&mut self) -> Option<ReviewCompletion> {
        self.review_rx.recv().await
    }

    /// Fan a finished attempt out to the dialog, the cache and the audit list.
    ///
    /// All three are updated before returning, so no frame is ever drawn with
    /// only some of them changed.
    pub fn handle_review_completion(&mut self, completion: ReviewCompletion) {
        let ReviewCompletion { generation, result } = completion;

        if let Err(e) = self
            .state
            .review_modal
            .complete_submit(generation, result.is_ok())
        {
            tracing::debug!(
                generation,
                current = self.state.review_modal.generation(),
                error = %e,
                "discarding review completion"
            );
            return;
        }

        match result {
            Ok(outcome) => {
                let identity = self.state.identity.clone();
                self.state
                    .submissions
                    .merge_review_update(&identity, outcome.submission);
                self.state.audits.replace(outcome.audits);
                self.state.set_review_modal_open(false);
                self.status_message = Some(REVIEW_UPDATED_MESSAGE.to_string());
            }
            Err(e) => self.push_error(AlertSource::Review, e.user_message()),
        }
    }

    /// Handle key events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if self.state.review_modal.is_open() {
            self.handle_review_dialog_key(key);
        } else {
            self.handle_submission_key(key);
        }
        Ok(())
    }

    fn handle_submission_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.open_review_modal(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_review_dialog_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.close_review_modal();
            return;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_review();
            return;
        }

        let modal = &mut self.state.review_modal;
        match key.code {
            KeyCode::Tab => {
                modal.focus_next();
                return;
            }
            KeyCode::BackTab => {
                modal.focus_prev();
                return;
            }
            _ => {}
        }

        let Some(focus) = modal.form().map(|f| f.focus()) else {
            return;
        };
        match (focus, key.code) {
            (ReviewFocus::ReviewState, KeyCode::Up | KeyCode::Char('k')) => modal.select_prev(),
            (ReviewFocus::ReviewState, KeyCode::Down | KeyCode::Char('j')) => modal.select_next(),
            (ReviewFocus::ReviewState | ReviewFocus::UpdateButton, KeyCode::Enter) => {
                self.submit_review()
            }
            (ReviewFocus::Notes, KeyCode::Enter) => modal.push_notes_newline(),
            (ReviewFocus::Notes, KeyCode::Backspace) => modal.pop_notes_char(),
            (ReviewFocus::Notes, KeyCode::Char(c)) => modal.push_notes_char(c),
            (ReviewFocus::CancelButton, KeyCode::Enter) => self.close_review_modal(),
            _ => {}
        }
    }
}

/// Server message when there is one, else the error itself
fn describe(err: &ApiError) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}
