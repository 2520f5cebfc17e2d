//! Trait abstraction for the API client to enable mocking in tests

use super::error::ApiError;
use crate::state::{AuditEntry, ReviewSelection, Submission, SubmissionIdentity, SubmissionPatch};
use async_trait::async_trait;

/// Remote operations on a single submission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Fetch the full submission representation
    async fn get_submission(&self, identity: &SubmissionIdentity) -> Result<Submission, ApiError>;

    /// Set the review state, optionally recording notes with the change
    async fn update_review_state(
        &self,
        identity: &SubmissionIdentity,
        selection: ReviewSelection,
        notes: Option<String>,
    ) -> Result<SubmissionPatch, ApiError>;

    /// Fetch the submission's audit log, in server order
    async fn list_audits(&self, identity: &SubmissionIdentity) -> Result<Vec<AuditEntry>, ApiError>;
}
