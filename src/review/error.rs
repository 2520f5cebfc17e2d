//! Errors of the review workflow

use std::fmt;
use thiserror::Error;

/// Shown when the server gave no message of its own
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while updating the review state. Please try again.";

/// Remote step of a review update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStage {
    UpdateReviewState,
    FetchAudits,
}

impl fmt::Display for ReviewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateReviewState => f.write_str("update the review state"),
            Self::FetchAudits => f.write_str("load the audit log"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The form had nothing to submit
    #[error("invalid review: {0}")]
    Validation(String),

    /// Either remote call failed; `message` is the server's own when it sent one
    #[error("failed to {stage}")]
    RemoteFailure {
        stage: ReviewStage,
        message: Option<String>,
    },

    /// Completion of an attempt whose form was closed or reopened meanwhile
    #[error("discarded response for a review form that is no longer current")]
    StaleResponse,
}

impl ReviewError {
    /// Text for the user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(reason) => reason.clone(),
            Self::RemoteFailure {
                message: Some(message),
                ..
            } => message.clone(),
            Self::RemoteFailure { message: None, .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::StaleResponse => self.to_string(),
        }
    }
}
