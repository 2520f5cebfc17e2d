//! Errors returned by the submission API client

use serde::Deserialize;
use thiserror::Error;

/// Problem body the server sends with error responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub code: Option<f64>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        problem: Option<Problem>,
    },

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// Message the server supplied with the failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                problem: Some(problem),
                ..
            } => Some(problem.message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_problem() {
        let problem: Problem = serde_json::from_str(
            r#"{"code":403.1,"message":"The authenticated actor does not have rights to perform that action."}"#,
        )
        .unwrap();
        let err = ApiError::Status {
            status: 403,
            problem: Some(problem),
        };
        assert_eq!(
            err.server_message(),
            Some("The authenticated actor does not have rights to perform that action.")
        );
    }

    #[test]
    fn test_no_server_message_without_problem() {
        let err = ApiError::Status {
            status: 502,
            problem: None,
        };
        assert!(err.server_message().is_none());
        assert_eq!(err.to_string(), "server responded with status 502");
    }
}
