//! HTTP client for the CodeAstra project endpoints.

mod error;

pub use error::{ProjectClientError, ProjectClientResult};

use crate::config::{ClientConfig, DEFAULT_API_BASE_URL};
use crate::models::ProjectCreationResult;
use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, info, warn};

const CREATE_PROJECT_PATH: &str = "api/project/create";

/// Client for the project API.
///
/// Cloning is cheap and clones share one connection pool. Calls carry no
/// retry, timeout, or deduplication: every invocation is one outbound
/// request.
#[derive(Clone, Debug)]
pub struct ProjectClient {
    base_url: String,
    client: Client,
}

impl Default for ProjectClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ProjectClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Ask the backend to create a project.
    ///
    /// Sends `POST /api/project/create` with a JSON content type and an empty
    /// body, and returns the decoded response body on a 2xx status.
    ///
    /// # Errors
    /// [`ProjectClientError::CreationFailed`] for any non-success status;
    /// [`ProjectClientError::Transport`] when the request cannot be sent or
    /// the body is not JSON.
    pub async fn create_project(&self) -> ProjectClientResult<ProjectCreationResult> {
        let url = self.api_url(CREATE_PROJECT_PATH);
        debug!(%url, "creating project");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "project creation rejected");
            return Err(ProjectClientError::CreationFailed { status });
        }

        let body: Value = response.json().await?;
        info!(%url, status = status.as_u16(), "project created");
        Ok(ProjectCreationResult(body))
    }
}
