//! Review update orchestration
//!
//! One review update is two remote calls: the update itself and then a
//! refetch of the audit log. They run strictly in order and the pair only
//! counts as a success when both succeed; nothing is handed back otherwise.

use super::error::{ReviewError, ReviewStage};
use crate::api::{ApiClientTrait, ApiError};
use crate::state::{AuditEntry, ReviewSelection, SubmissionIdentity, SubmissionPatch};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A confirmed review change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub identity: SubmissionIdentity,
    pub selection: ReviewSelection,
    /// Free text; empty means no notes
    pub notes: String,
}

/// Results of a successful review update
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    pub submission: SubmissionPatch,
    pub audits: Vec<AuditEntry>,
}

/// Outcome of a background attempt, tagged with the dialog generation that issued it
#[derive(Debug)]
pub struct ReviewCompletion {
    pub generation: u64,
    pub result: Result<ReviewOutcome, ReviewError>,
}

/// Apply a review change and fetch the refreshed audit log
pub async fn submit(
    client: &dyn ApiClientTrait,
    request: &ReviewRequest,
) -> Result<ReviewOutcome, ReviewError> {
    let notes = (!request.notes.is_empty()).then(|| request.notes.clone());
    tracing::debug!(
        submission = %request.identity,
        selection = ?request.selection,
        has_notes = notes.is_some(),
        "updating review state"
    );

    let submission = client
        .update_review_state(&request.identity, request.selection, notes)
        .await
        .map_err(|err| remote_failure(ReviewStage::UpdateReviewState, err))?;

    let audits = client
        .list_audits(&request.identity)
        .await
        .map_err(|err| remote_failure(ReviewStage::FetchAudits, err))?;

    tracing::info!(
        submission = %request.identity,
        selection = ?request.selection,
        audits = audits.len(),
        "review state updated"
    );
    Ok(ReviewOutcome { submission, audits })
}

/// Run [`submit`] on a background task and report through `tx`
pub fn spawn_submit(
    client: Arc<dyn ApiClientTrait>,
    generation: u64,
    request: ReviewRequest,
    tx: UnboundedSender<ReviewCompletion>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = submit(client.as_ref(), &request).await;
        if tx.send(ReviewCompletion { generation, result }).is_err() {
            tracing::debug!(generation, "review completion dropped, receiver closed");
        }
    })
}

fn remote_failure(stage: ReviewStage, err: ApiError) -> ReviewError {
    tracing::warn!(%stage, error = %err, "review update failed");
    ReviewError::RemoteFailure {
        stage,
        message: err.server_message().map(str::to_string),
    }
}
