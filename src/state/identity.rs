//! Identity of the submission under review

use std::fmt;

/// The (project, form, instance) triple that addresses one submission.
///
/// Resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionIdentity {
    pub project_id: String,
    pub xml_form_id: String,
    pub instance_id: String,
}

impl SubmissionIdentity {
    pub fn new(
        project_id: impl Into<String>,
        xml_form_id: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            xml_form_id: xml_form_id.into(),
            instance_id: instance_id.into(),
        }
    }

    /// API path of the submission resource, each segment percent-encoded
    pub fn submission_path(&self) -> String {
        format!(
            "/v1/projects/{}/forms/{}/submissions/{}",
            urlencoding::encode(&self.project_id),
            urlencoding::encode(&self.xml_form_id),
            urlencoding::encode(&self.instance_id),
        )
    }

    /// API path of the submission's audit log
    pub fn audits_path(&self) -> String {
        format!("{}/audits", self.submission_path())
    }
}

impl fmt::Display for SubmissionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.project_id, self.xml_form_id, self.instance_id
        )
    }
}
