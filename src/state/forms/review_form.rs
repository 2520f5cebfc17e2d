//! Review dialog form state
//!
//! The dialog's visibility is owned by the caller. [`ReviewModal::sync_open`]
//! reacts only to changes of that flag: a closed→open edge rebuilds the form
//! from the cached submission, an open→closed edge drops it. Calling it again
//! with an unchanged flag leaves in-progress edits alone.

use super::field::FormField;
use crate::review::ReviewError;
use crate::state::{ReviewSelection, Submission};

/// Lifecycle phase of an open form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewPhase {
    Pristine,
    Dirty,
    Submitting,
}

/// Combined open/closed × phase state of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewModalState {
    Closed,
    Pristine,
    Dirty,
    Submitting,
}

/// Focusable areas of the dialog, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFocus {
    #[default]
    ReviewState,
    Notes,
    UpdateButton,
    CancelButton,
}

impl ReviewFocus {
    const ORDER: [ReviewFocus; 4] = [
        ReviewFocus::ReviewState,
        ReviewFocus::Notes,
        ReviewFocus::UpdateButton,
        ReviewFocus::CancelButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// The single control holding input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedControl {
    /// The radio button of this review state
    ReviewState(ReviewSelection),
    Notes,
    UpdateButton,
    CancelButton,
}

/// Everything the dialog edits while it is open
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub selection: ReviewSelection,
    pub notes: FormField,
    phase: ReviewPhase,
    focus: ReviewFocus,
}

impl ReviewForm {
    /// Fresh form for the given submission, focused on its selected radio
    pub fn from_submission(current: Option<&Submission>) -> Self {
        Self {
            selection: ReviewSelection::from_current(current.and_then(|s| s.review_state)),
            notes: FormField::text("Notes", true),
            phase: ReviewPhase::Pristine,
            focus: ReviewFocus::ReviewState,
        }
    }

    pub fn focus(&self) -> ReviewFocus {
        self.focus
    }

    pub fn awaiting_response(&self) -> bool {
        self.phase == ReviewPhase::Submitting
    }

    pub fn focused_control(&self) -> FocusedControl {
        match self.focus {
            ReviewFocus::ReviewState => FocusedControl::ReviewState(self.selection),
            ReviewFocus::Notes => FocusedControl::Notes,
            ReviewFocus::UpdateButton => FocusedControl::UpdateButton,
            ReviewFocus::CancelButton => FocusedControl::CancelButton,
        }
    }

    fn mark_dirty(&mut self) {
        self.phase = ReviewPhase::Dirty;
    }
}

/// What a confirmed form hands to the review orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    /// Open period that issued the attempt
    pub generation: u64,
    pub selection: ReviewSelection,
    pub notes: String,
}

/// The review dialog: last-seen open flag, open-period counter and form
#[derive(Debug, Default)]
pub struct ReviewModal {
    open: bool,
    generation: u64,
    form: Option<ReviewForm>,
}

impl ReviewModal {
    /// Follow the caller's open flag. Returns true if this was an edge.
    pub fn sync_open(&mut self, open: bool, current: Option<&Submission>) -> bool {
        if open == self.open {
            return false;
        }
        self.open = open;
        if open {
            self.generation += 1;
            self.form = Some(ReviewForm::from_submission(current));
            tracing::debug!(generation = self.generation, "review dialog opened");
        } else {
            self.form = None;
            tracing::debug!(generation = self.generation, "review dialog closed");
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn form(&self) -> Option<&ReviewForm> {
        self.form.as_ref()
    }

    pub fn state(&self) -> ReviewModalState {
        match self.form.as_ref().map(|f| f.phase) {
            None => ReviewModalState::Closed,
            Some(ReviewPhase::Pristine) => ReviewModalState::Pristine,
            Some(ReviewPhase::Dirty) => ReviewModalState::Dirty,
            Some(ReviewPhase::Submitting) => ReviewModalState::Submitting,
        }
    }

    /// Form that accepts edits: open and not waiting on the server
    fn editable_form(&mut self) -> Option<&mut ReviewForm> {
        self.form.as_mut().filter(|f| !f.awaiting_response())
    }

    pub fn select(&mut self, selection: ReviewSelection) {
        if let Some(form) = self.editable_form() {
            if form.selection != selection {
                form.selection = selection;
                form.mark_dirty();
            }
        }
    }

    pub fn select_next(&mut self) {
        if let Some(selection) = self.form.as_ref().map(|f| f.selection.next()) {
            self.select(selection);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(selection) = self.form.as_ref().map(|f| f.selection.prev()) {
            self.select(selection);
        }
    }

    pub fn push_notes_char(&mut self, c: char) {
        if let Some(form) = self.editable_form() {
            form.notes.push_char(c);
            form.mark_dirty();
        }
    }

    pub fn push_notes_newline(&mut self) {
        if let Some(form) = self.editable_form() {
            form.notes.push_newline();
            form.mark_dirty();
        }
    }

    pub fn pop_notes_char(&mut self) {
        if let Some(form) = self.editable_form() {
            if !form.notes.is_empty() {
                form.notes.pop_char();
                form.mark_dirty();
            }
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.focus = form.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.focus = form.focus.prev();
        }
    }

    /// Move to `Submitting` and hand out the attempt.
    ///
    /// Returns `Ok(None)` while an attempt is already in flight.
    pub fn begin_submit(&mut self) -> Result<Option<SubmitTicket>, ReviewError> {
        let generation = self.generation;
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| ReviewError::Validation("the review form is not open".to_string()))?;
        if form.awaiting_response() {
            return Ok(None);
        }
        form.phase = ReviewPhase::Submitting;
        Ok(Some(SubmitTicket {
            generation,
            selection: form.selection,
            notes: form.notes.as_text().to_string(),
        }))
    }

    /// Record the outcome of the attempt issued in `generation`.
    ///
    /// A failure puts the form back to `Dirty` with its edits. A success leaves
    /// it submitting until the caller closes the dialog. An outcome for any
    /// other open period, or for a form that is not submitting, is stale.
    pub fn complete_submit(&mut self, generation: u64, succeeded: bool) -> Result<(), ReviewError> {
        if generation != self.generation {
            return Err(ReviewError::StaleResponse);
        }
        let form = self
            .form
            .as_mut()
            .filter(|f| f.awaiting_response())
            .ok_or(ReviewError::StaleResponse)?;
        if !succeeded {
            form.phase = ReviewPhase::Dirty;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReviewState;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn submission(review_state: Option<ReviewState>) -> Submission {
        let mut submission: Submission = serde_json::from_value(json!({
            "instanceId": "s",
            "submitterId": "1"
        }))
        .unwrap();
        submission.review_state = review_state;
        submission
    }

    fn open_modal(review_state: Option<ReviewState>) -> ReviewModal {
        let mut modal = ReviewModal::default();
        modal.sync_open(true, Some(&submission(review_state)));
        modal
    }

    mod opening {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_closed() {
            let modal = ReviewModal::default();
            assert_eq!(modal.state(), ReviewModalState::Closed);
            assert!(modal.form().is_none());
        }

        #[test]
        fn test_selection_matches_current_review_state() {
            for state in [
                ReviewState::Approved,
                ReviewState::HasIssues,
                ReviewState::Rejected,
            ] {
                let modal = open_modal(Some(state));
                let form = modal.form().unwrap();
                assert_eq!(form.selection.review_state(), Some(state));
            }
        }

        #[test]
        fn test_selection_defaults_to_approved_for_null() {
            let modal = open_modal(None);
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Approved);
        }

        #[test]
        fn test_selection_defaults_to_approved_for_edited() {
            let modal = open_modal(Some(ReviewState::Edited));
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Approved);
        }

        #[test]
        fn test_selection_defaults_to_approved_without_submission() {
            let mut modal = ReviewModal::default();
            modal.sync_open(true, None);
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Approved);
        }

        #[test]
        fn test_opens_pristine_with_empty_notes() {
            let modal = open_modal(None);
            assert_eq!(modal.state(), ReviewModalState::Pristine);
            assert!(modal.form().unwrap().notes.is_empty());
        }

        #[test]
        fn test_selected_radio_has_focus() {
            let modal = open_modal(Some(ReviewState::HasIssues));
            assert_eq!(
                modal.form().unwrap().focused_control(),
                FocusedControl::ReviewState(ReviewSelection::HasIssues)
            );
        }

        #[test]
        fn test_each_open_is_a_new_generation() {
            let mut modal = open_modal(None);
            assert_eq!(modal.generation(), 1);
            modal.sync_open(false, None);
            modal.sync_open(true, None);
            assert_eq!(modal.generation(), 2);
        }
    }

    mod edge_triggering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_repeated_open_keeps_edits() {
            let source = submission(Some(ReviewState::HasIssues));
            let mut modal = ReviewModal::default();
            modal.sync_open(true, Some(&source));
            modal.select(ReviewSelection::Rejected);

            assert!(!modal.sync_open(true, Some(&source)));
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Rejected);
            assert_eq!(modal.generation(), 1);
        }

        #[test]
        fn test_reopen_resets_form() {
            let source = submission(Some(ReviewState::HasIssues));
            let mut modal = ReviewModal::default();
            modal.sync_open(true, Some(&source));
            modal.select(ReviewSelection::Rejected);
            modal.focus_next();
            for c in "Some notes".chars() {
                modal.push_notes_char(c);
            }

            assert!(modal.sync_open(false, Some(&source)));
            assert_eq!(modal.state(), ReviewModalState::Closed);
            assert!(modal.sync_open(true, Some(&source)));

            let form = modal.form().unwrap();
            assert_eq!(form.selection, ReviewSelection::HasIssues);
            assert!(form.notes.is_empty());
            assert_eq!(form.focus(), ReviewFocus::ReviewState);
            assert_eq!(modal.state(), ReviewModalState::Pristine);
        }

        #[test]
        fn test_reopen_resets_to_approved_when_current_is_null() {
            let source = submission(None);
            let mut modal = ReviewModal::default();
            modal.sync_open(true, Some(&source));
            modal.select(ReviewSelection::HasIssues);
            modal.sync_open(false, Some(&source));
            modal.sync_open(true, Some(&source));
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Approved);
        }

        #[test]
        fn test_reopen_reads_latest_submission() {
            let mut modal = ReviewModal::default();
            modal.sync_open(true, Some(&submission(None)));
            modal.sync_open(false, None);
            modal.sync_open(true, Some(&submission(Some(ReviewState::Rejected))));
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Rejected);
        }

        #[test]
        fn test_close_while_closed_is_noop() {
            let mut modal = ReviewModal::default();
            assert!(!modal.sync_open(false, None));
            assert_eq!(modal.generation(), 0);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selection_change_marks_dirty() {
            let mut modal = open_modal(None);
            modal.select_next();
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::HasIssues);
            assert_eq!(modal.state(), ReviewModalState::Dirty);
        }

        #[test]
        fn test_same_selection_stays_pristine() {
            let mut modal = open_modal(None);
            modal.select(ReviewSelection::Approved);
            assert_eq!(modal.state(), ReviewModalState::Pristine);
        }

        #[test]
        fn test_notes_edit_marks_dirty() {
            let mut modal = open_modal(None);
            modal.push_notes_char('a');
            modal.push_notes_newline();
            modal.push_notes_char('b');
            assert_eq!(modal.form().unwrap().notes.as_text(), "a\nb");
            assert_eq!(modal.state(), ReviewModalState::Dirty);
        }

        #[test]
        fn test_focus_follows_selection() {
            let mut modal = open_modal(None);
            modal.select_prev();
            assert_eq!(
                modal.form().unwrap().focused_control(),
                FocusedControl::ReviewState(ReviewSelection::Received)
            );
        }

        #[test]
        fn test_focus_cycles() {
            let mut modal = open_modal(None);
            modal.focus_next();
            assert_eq!(modal.form().unwrap().focused_control(), FocusedControl::Notes);
            modal.focus_prev();
            modal.focus_prev();
            assert_eq!(
                modal.form().unwrap().focused_control(),
                FocusedControl::CancelButton
            );
        }

        #[test]
        fn test_edits_ignored_while_submitting() {
            let mut modal = open_modal(None);
            modal.begin_submit().unwrap();
            modal.select(ReviewSelection::Rejected);
            modal.push_notes_char('x');
            let form = modal.form().unwrap();
            assert_eq!(form.selection, ReviewSelection::Approved);
            assert!(form.notes.is_empty());
            assert_eq!(modal.state(), ReviewModalState::Submitting);
        }

        #[test]
        fn test_edits_ignored_while_closed() {
            let mut modal = ReviewModal::default();
            modal.select(ReviewSelection::Rejected);
            modal.push_notes_char('x');
            assert_eq!(modal.state(), ReviewModalState::Closed);
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_hands_out_ticket() {
            let mut modal = open_modal(None);
            modal.select(ReviewSelection::HasIssues);
            modal.push_notes_char('n');

            let ticket = modal.begin_submit().unwrap().unwrap();
            assert_eq!(
                ticket,
                SubmitTicket {
                    generation: 1,
                    selection: ReviewSelection::HasIssues,
                    notes: "n".to_string(),
                }
            );
            assert_eq!(modal.state(), ReviewModalState::Submitting);
            assert!(modal.form().unwrap().awaiting_response());
        }

        #[test]
        fn test_second_submit_is_noop() {
            let mut modal = open_modal(None);
            assert!(modal.begin_submit().unwrap().is_some());
            assert!(modal.begin_submit().unwrap().is_none());
        }

        #[test]
        fn test_submit_while_closed_is_validation_error() {
            let mut modal = ReviewModal::default();
            let err = modal.begin_submit().unwrap_err();
            assert!(matches!(err, ReviewError::Validation(_)));
        }

        #[test]
        fn test_failure_returns_to_dirty_with_edits() {
            let mut modal = open_modal(Some(ReviewState::Approved));
            modal.select(ReviewSelection::Rejected);
            modal.push_notes_char('x');
            let ticket = modal.begin_submit().unwrap().unwrap();

            modal.complete_submit(ticket.generation, false).unwrap();

            let form = modal.form().unwrap();
            assert_eq!(modal.state(), ReviewModalState::Dirty);
            assert_eq!(form.selection, ReviewSelection::Rejected);
            assert_eq!(form.notes.as_text(), "x");
        }

        #[test]
        fn test_failure_from_pristine_is_dirty() {
            let mut modal = open_modal(None);
            let ticket = modal.begin_submit().unwrap().unwrap();
            modal.complete_submit(ticket.generation, false).unwrap();
            assert_eq!(modal.state(), ReviewModalState::Dirty);
        }

        #[test]
        fn test_can_resubmit_after_failure() {
            let mut modal = open_modal(None);
            let first = modal.begin_submit().unwrap().unwrap();
            modal.complete_submit(first.generation, false).unwrap();
            assert!(modal.begin_submit().unwrap().is_some());
        }

        #[test]
        fn test_success_then_close() {
            let mut modal = open_modal(None);
            let ticket = modal.begin_submit().unwrap().unwrap();
            modal.complete_submit(ticket.generation, true).unwrap();
            modal.sync_open(false, None);
            assert_eq!(modal.state(), ReviewModalState::Closed);
        }

        #[test]
        fn test_cancel_while_submitting() {
            let mut modal = open_modal(None);
            modal.begin_submit().unwrap();
            assert!(modal.sync_open(false, None));
            assert_eq!(modal.state(), ReviewModalState::Closed);
        }

        #[test]
        fn test_completion_after_close_is_stale() {
            let mut modal = open_modal(None);
            let ticket = modal.begin_submit().unwrap().unwrap();
            modal.sync_open(false, None);

            let err = modal.complete_submit(ticket.generation, true).unwrap_err();
            assert_eq!(err, ReviewError::StaleResponse);
        }

        #[test]
        fn test_completion_after_reopen_is_stale() {
            let mut modal = open_modal(None);
            let ticket = modal.begin_submit().unwrap().unwrap();
            modal.sync_open(false, None);
            modal.sync_open(true, Some(&submission(Some(ReviewState::Rejected))));

            let err = modal.complete_submit(ticket.generation, false).unwrap_err();
            assert_eq!(err, ReviewError::StaleResponse);
            assert_eq!(modal.state(), ReviewModalState::Pristine);
            assert_eq!(modal.form().unwrap().selection, ReviewSelection::Rejected);
        }

        #[test]
        fn test_completion_without_pending_attempt_is_stale() {
            let mut modal = open_modal(None);
            let err = modal.complete_submit(modal.generation(), true).unwrap_err();
            assert_eq!(err, ReviewError::StaleResponse);
        }
    }
}
