//! Shared submission cache
//!
//! Every view that shows the submission reads it from here. The review
//! workflow is the only writer, and it writes through
//! [`SubmissionCache::merge_review_update`] so that fields the server
//! omitted from a response are never lost.

use super::identity::SubmissionIdentity;
use super::submission::{Submission, SubmissionPatch};
use std::collections::HashMap;

/// Keyed store of the last-known submission for each identity
#[derive(Debug, Default)]
pub struct SubmissionCache {
    entries: HashMap<SubmissionIdentity, Submission>,
}

impl SubmissionCache {
    pub fn get(&self, identity: &SubmissionIdentity) -> Option<&Submission> {
        self.entries.get(identity)
    }

    /// Seed the cache with a freshly loaded submission, replacing any prior entry
    pub fn insert(&mut self, identity: SubmissionIdentity, submission: Submission) {
        self.entries.insert(identity, submission);
    }

    /// Merge an update response into the cached entry.
    ///
    /// Returns the merged submission, or `None` when nothing is cached for the
    /// identity (the patch is then dropped; a partial representation is never
    /// promoted to a cache entry).
    pub fn merge_review_update(
        &mut self,
        identity: &SubmissionIdentity,
        patch: SubmissionPatch,
    ) -> Option<&Submission> {
        let current = self.entries.get_mut(identity)?;
        merge_review_update(current, patch);
        Some(current)
    }
}

/// Shallow-merge `patch` into `current`; system metadata merges per field
pub fn merge_review_update(current: &mut Submission, patch: SubmissionPatch) {
    if let Some(id) = patch.id {
        current.id = id;
    }
    if let Some(review_state) = patch.review_state {
        current.review_state = review_state;
    }
    for (key, value) in patch.system_metadata {
        current.system_metadata.insert(key, value);
    }
}
