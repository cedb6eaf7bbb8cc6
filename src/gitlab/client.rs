//! gitlab::client
//!
//! GitLab API client for the group-projects listing endpoint.
//!
//! # Design
//!
//! The client wraps a single REST call:
//! `GET {base_url}api/v4/groups/{group_id}/projects`. The private token is
//! sent as the `private_token` query parameter; no Authorization header is
//! ever attached. The configured base URL is used as a path prefix verbatim
//! and is expected to end in a slash.
//!
//! # Timeouts
//!
//! By default no timeout is configured and a hung connection blocks the run
//! indefinitely, matching the historical behavior. [`GitLabClient::with_timeout`]
//! bounds the whole request instead.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use super::project::Project;

/// Fixed path segment of the group-projects listing endpoint.
const GROUP_PROJECTS_PATH: &str = "api/v4/groups";

/// Page size requested when subgroup projects are included.
const SUBGROUP_PAGE_SIZE: &str = "100";

/// Errors from GitLab API operations.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body (or status text) from the API
        message: String,
    },

    /// The response body did not decode into a project listing.
    #[error("failed to decode project listing: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Client(String),
}

/// Options for the listing request.
///
/// The default matches the behavior the tool has always shipped with:
/// subgroup projects included, one page of up to 100 results.
#[derive(Debug, Clone)]
pub struct ListProjectsOpts {
    /// Ask the server to include projects of subgroups. When set, a
    /// `per_page=100` parameter rides along; without it the server default
    /// page size applies.
    pub include_subgroups: bool,
}

impl Default for ListProjectsOpts {
    fn default() -> Self {
        Self {
            include_subgroups: true,
        }
    }
}

/// GitLab API client.
///
/// Holds the HTTP client, the base URL prefix, and the private token.
pub struct GitLabClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL prefix, trailing slash expected
    base_url: String,
    /// Private token, sent in the query string
    token: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabClient")
            .field("base_url", &self.base_url)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

impl GitLabClient {
    /// Create a client with no request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Instance base URL, trailing slash expected
    /// * `token` - Private token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Create a client whose requests time out after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GitLabError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GitLabError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Build the listing URL for a group, without query parameters.
    ///
    /// The base URL is concatenated verbatim, so a missing trailing slash
    /// produces a broken URL; the configuration contract requires one.
    pub fn group_projects_url(&self, group_id: &str) -> String {
        format!(
            "{}{}/{}/projects",
            self.base_url, GROUP_PROJECTS_PATH, group_id
        )
    }

    /// List the projects of a group.
    ///
    /// One GET, one page. Even when the server indicates more results
    /// exist, no further pages are fetched.
    ///
    /// # Errors
    ///
    /// - `Network` on transport failure
    /// - `Api` on a non-success status
    /// - `Decode` when the body is not a JSON array of projects
    pub async fn list_group_projects(
        &self,
        group_id: &str,
        opts: &ListProjectsOpts,
    ) -> Result<Vec<Project>, GitLabError> {
        let url = self.group_projects_url(group_id);

        let mut request = self
            .client
            .get(&url)
            .query(&[("private_token", self.token.as_str())]);
        if opts.include_subgroups {
            request = request.query(&[
                ("include_subgroups", "true"),
                ("per_page", SUBGROUP_PAGE_SIZE),
            ]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GitLabError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Map a response into the decoded listing or a typed error.
    async fn handle_response(response: Response) -> Result<Vec<Project>, GitLabError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GitLabError::Decode(e.to_string()))
        } else {
            let message = Self::error_message(response, status).await;
            Err(GitLabError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Extract a human-readable message from an error response.
    async fn error_message(response: Response, status: StatusCode) -> String {
        match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        }
    }
}
