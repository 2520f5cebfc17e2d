//! Configuration handling for the TUI

use crate::state::SubmissionIdentity;
use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "REVIEW_SERVER_URL";
/// Environment variable overriding the session token
pub const SESSION_TOKEN_ENV: &str = "REVIEW_SESSION_TOKEN";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Server base URL, e.g. `https://central.example.org`
    pub server_url: Option<String>,
    /// Bearer token of an existing session
    pub session_token: Option<String>,
    /// Default project when only the form and instance are given
    pub project_id: Option<String>,
    /// Default form when only the instance is given
    pub xml_form_id: Option<String>,
}

/// Everything needed to start reviewing one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub server_url: String,
    pub session_token: Option<String>,
    pub identity: SubmissionIdentity,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "submission-review", "submission-review-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment overrides
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            self.server_url = Some(url);
        }
        if let Ok(token) = std::env::var(SESSION_TOKEN_ENV) {
            self.session_token = Some(token);
        }
        self
    }

    /// Combine with positional arguments `[[projectId] xmlFormId] instanceId`
    pub fn resolve(&self, args: &[String]) -> Result<ResolvedConfig> {
        let Some(server_url) = self.server_url.clone().filter(|u| !u.is_empty()) else {
            bail!("no server URL configured (set {SERVER_URL_ENV} or server_url in the config file)");
        };

        let (project_id, xml_form_id, instance_id) = match args {
            [project, form, instance] => (Some(project.clone()), Some(form.clone()), instance),
            [form, instance] => (self.project_id.clone(), Some(form.clone()), instance),
            [instance] => (self.project_id.clone(), self.xml_form_id.clone(), instance),
            [] => bail!("usage: submission-review-tui [[projectId] xmlFormId] instanceId"),
            _ => bail!("too many arguments; expected [[projectId] xmlFormId] instanceId"),
        };
        let Some(project_id) = project_id else {
            bail!("no project id given and none configured");
        };
        let Some(xml_form_id) = xml_form_id else {
            bail!("no form id given and none configured");
        };

        Ok(ResolvedConfig {
            server_url,
            session_token: self.session_token.clone(),
            identity: SubmissionIdentity::new(project_id, xml_form_id, instance_id.clone()),
        })
    }
}
