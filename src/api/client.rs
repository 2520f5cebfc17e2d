//! reqwest-based client for the submission API
//!
//! Session handling is limited to attaching a bearer token; retries and
//! timeouts are whatever the underlying reqwest client does.

use super::error::{ApiError, Problem};
use super::traits::ApiClientTrait;
use crate::state::{AuditEntry, ReviewSelection, Submission, SubmissionIdentity, SubmissionPatch};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Header carrying notes that accompany a change
pub const ACTION_NOTES_HEADER: &str = "X-Action-Notes";

/// Percent-encode notes so that any text (newlines included) fits in a header
pub fn encode_action_notes(notes: &str) -> String {
    urlencoding::encode(notes).into_owned()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewStateBody {
    review_state: ReviewSelection,
}

/// Client for communicating with the server
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, session_token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("submission-review-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.session_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Build the review state update without sending it
    fn review_request(
        &self,
        identity: &SubmissionIdentity,
        selection: ReviewSelection,
        notes: Option<&str>,
    ) -> Result<Request, ApiError> {
        let mut builder = self
            .request(Method::PATCH, &identity.submission_path())
            .json(&ReviewStateBody {
                review_state: selection,
            });
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            let value = HeaderValue::from_str(&encode_action_notes(notes))?;
            builder = builder.header(ACTION_NOTES_HEADER, value);
        }
        Ok(builder.build()?)
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.http.execute(request).await?;
        read_response(response).await
    }
}

/// Decode a success body, or turn an error status into [`ApiError::Status`]
/// carrying the server's problem body when it sent one.
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let problem = serde_json::from_str::<Problem>(&body).ok();
    tracing::debug!(
        status = status.as_u16(),
        code = ?problem.as_ref().and_then(|p| p.code),
        "request failed"
    );
    Err(ApiError::Status {
        status: status.as_u16(),
        problem,
    })
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn get_submission(&self, identity: &SubmissionIdentity) -> Result<Submission, ApiError> {
        let request = self
            .request(Method::GET, &identity.submission_path())
            .build()?;
        self.execute(request).await
    }

    async fn update_review_state(
        &self,
        identity: &SubmissionIdentity,
        selection: ReviewSelection,
        notes: Option<String>,
    ) -> Result<SubmissionPatch, ApiError> {
        let request = self.review_request(identity, selection, notes.as_deref())?;
        self.execute(request).await
    }

    async fn list_audits(&self, identity: &SubmissionIdentity) -> Result<Vec<AuditEntry>, ApiError> {
        let request = self.request(Method::GET, &identity.audits_path()).build()?;
        self.execute(request).await
    }
}
