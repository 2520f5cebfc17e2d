//! Audit log entries and the list backing the audit view

use super::submission::{review_state_label, ReviewState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a submission's audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub action: String,
    #[serde(default)]
    pub actor_id: Option<i64>,
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl AuditEntry {
    /// Review state recorded by a `submission.update` entry.
    ///
    /// The outer `Option` is `None` when the entry carries no review state;
    /// the inner one is `None` when the state was cleared.
    pub fn review_state(&self) -> Option<Option<ReviewState>> {
        let raw = self.details.as_ref()?.get("reviewState")?;
        serde_json::from_value(raw.clone()).ok()
    }

    /// Short description of the entry for the audit list
    pub fn label(&self) -> String {
        match self.action.as_str() {
            "submission.create" => "Submitted".to_string(),
            "submission.update" => match self.review_state() {
                Some(state) => format!("Updated to {}", review_state_label(state)),
                None => "Updated".to_string(),
            },
            "submission.update.version" => "Edited".to_string(),
            "submission.attachment.update" => "Attachment updated".to_string(),
            other => other.to_string(),
        }
    }
}

/// Backing sequence of the audit view.
///
/// Entries are kept in the order the server returned them; a refresh replaces
/// the whole sequence.
#[derive(Debug, Clone, Default)]
pub struct AuditList {
    entries: Vec<AuditEntry>,
}

impl AuditList {
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn replace(&mut self, entries: Vec<AuditEntry>) {
        self.entries = entries;
    }
}
