//! Submission model as reported by the server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Server-owned fields of a submission (submitter, timestamps, device, ...)
pub type SystemMetadata = Map<String, Value>;

/// Review disposition of a submission.
///
/// A submission with no review state at all is represented as `None`
/// wherever an `Option<ReviewState>` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewState {
    HasIssues,
    /// Set by the server when a submission is edited; never chosen by a reviewer
    Edited,
    Approved,
    Rejected,
}

impl ReviewState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HasIssues => "Has Issues",
            Self::Edited => "Edited",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Human label for an optional review state
pub fn review_state_label(state: Option<ReviewState>) -> &'static str {
    state.map(|s| s.label()).unwrap_or("Received")
}

/// Review state a reviewer can choose in the review dialog.
///
/// `Received` clears the review state (sent as `null`). There is no way to
/// choose [`ReviewState::Edited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewSelection {
    Approved,
    HasIssues,
    Rejected,
    Received,
}

impl ReviewSelection {
    /// Options in the order the dialog lists them
    pub const ALL: [ReviewSelection; 4] = [
        ReviewSelection::Approved,
        ReviewSelection::HasIssues,
        ReviewSelection::Rejected,
        ReviewSelection::Received,
    ];

    /// Initial selection for a submission currently in `current`.
    ///
    /// No review state and `edited` both fall back to `Approved`.
    pub fn from_current(current: Option<ReviewState>) -> Self {
        match current {
            Some(ReviewState::HasIssues) => Self::HasIssues,
            Some(ReviewState::Rejected) => Self::Rejected,
            Some(ReviewState::Approved) | Some(ReviewState::Edited) | None => Self::Approved,
        }
    }

    pub fn review_state(self) -> Option<ReviewState> {
        match self {
            Self::Approved => Some(ReviewState::Approved),
            Self::HasIssues => Some(ReviewState::HasIssues),
            Self::Rejected => Some(ReviewState::Rejected),
            Self::Received => None,
        }
    }

    pub fn label(self) -> &'static str {
        review_state_label(self.review_state())
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next option, wrapping like a radio group
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping like a radio group
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl Serialize for ReviewSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.review_state().serialize(serializer)
    }
}

/// Last-known full representation of a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "instanceId")]
    pub id: String,
    #[serde(default)]
    pub review_state: Option<ReviewState>,
    #[serde(flatten)]
    pub system_metadata: SystemMetadata,
}

impl Submission {
    /// Submitter id, whether the server sent it as a number or a string
    pub fn submitter_id(&self) -> Option<String> {
        metadata_string(&self.system_metadata, "submitterId")
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        metadata_timestamp(&self.system_metadata, "createdAt")
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        metadata_timestamp(&self.system_metadata, "updatedAt")
    }
}

/// Submission representation returned by an update.
///
/// Every field is optional so that a response omitting a field can be told
/// apart from one that explicitly clears it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPatch {
    #[serde(rename = "instanceId", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub review_state: Option<Option<ReviewState>>,
    #[serde(flatten)]
    pub system_metadata: SystemMetadata,
}

/// Maps a present field (including an explicit `null`) to `Some`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn metadata_string(metadata: &SystemMetadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn metadata_timestamp(metadata: &SystemMetadata, key: &str) -> Option<DateTime<Utc>> {
    let raw = metadata.get(key)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
