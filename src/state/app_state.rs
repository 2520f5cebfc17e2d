//! Application state definitions

use super::audit::AuditList;
use super::cache::SubmissionCache;
use super::forms::ReviewModal;
use super::identity::SubmissionIdentity;
use super::submission::Submission;
use std::collections::VecDeque;

/// Workflow an error alert was raised by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSource {
    /// Initial fetch of the submission or its audit log
    Load,
    /// A review state change
    Review,
}

impl AlertSource {
    pub fn title(self) -> &'static str {
        match self {
            Self::Load => "Could not load submission",
            Self::Review => "Review state not updated",
        }
    }
}

/// Queued error shown in the alert dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    pub source: AlertSource,
    pub message: String,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Submission under review
    pub identity: SubmissionIdentity,

    // Data
    pub submissions: SubmissionCache,
    pub audits: AuditList,

    /// Whether the review dialog should be shown. Owned here; the dialog
    /// only follows it.
    pub review_modal_open: bool,
    pub review_modal: ReviewModal,

    /// True until the initial load finishes
    pub loading: bool,

    errors: VecDeque<ErrorAlert>,
}

impl AppState {
    pub fn new(identity: SubmissionIdentity) -> Self {
        Self {
            identity,
            submissions: SubmissionCache::default(),
            audits: AuditList::default(),
            review_modal_open: false,
            review_modal: ReviewModal::default(),
            loading: true,
            errors: VecDeque::new(),
        }
    }

    /// The cached submission under review
    pub fn current_submission(&self) -> Option<&Submission> {
        self.submissions.get(&self.identity)
    }

    /// Set the dialog's open flag and let the dialog react to the edge
    pub fn set_review_modal_open(&mut self, open: bool) {
        self.review_modal_open = open;
        let current = self.submissions.get(&self.identity);
        self.review_modal.sync_open(open, current);
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, source: AlertSource, message: String) {
        self.errors.push_back(ErrorAlert { source, message });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown
    pub fn current_error(&self) -> Option<&ErrorAlert> {
        self.errors.front()
    }

    /// Errors queued behind the one currently shown
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
