//! GitHub API client.
//!
//! This module provides the HTTP client for the three read-only endpoints
//! the portfolio consumes: user profile, repository list, and per-file
//! contents lookup.

use crate::models::{FileContents, GitHubUser, Repo};
use reqwest::Client;

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// User-Agent sent with every request; GitHub rejects requests without one.
const USER_AGENT: &str = concat!("devfolio/", env!("CARGO_PKG_VERSION"));

/// Error type for GitHub client operations
///
/// Deserialization failures surface through the `Http` variant: response
/// bodies are parsed by reqwest's `json()`, which wraps serde errors in
/// `reqwest::Error`.
#[derive(Debug)]
pub enum GitHubError {
    /// HTTP request failed (transport or payload decoding)
    Http(reqwest::Error),
    /// Server returned an error status
    Status { status: u16, message: String },
}

impl std::fmt::Display for GitHubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitHubError::Http(e) => write!(f, "HTTP error: {}", e),
            GitHubError::Status { status, message } => {
                write!(f, "GitHub returned {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for GitHubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitHubError::Http(e) => Some(e),
            GitHubError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::Http(e)
    }
}

/// Client for the GitHub REST API.
///
/// Unauthenticated: no credentials are sent, so requests count against the
/// anonymous rate limit.
pub struct GitHubClient {
    /// Base URL for the API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHubClient against the public API.
    pub fn new() -> Self {
        Self {
            base_url: GITHUB_API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a new GitHubClient with a custom base URL (used in tests to
    /// point at a mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch the profile for an account.
    ///
    /// Sends `GET /users/{username}`.
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        let url = format!("{}/users/{}", self.base_url, username);
        let response = self.get(&url).await?;
        Ok(response.json::<GitHubUser>().await?)
    }

    /// Fetch an account's repositories, most recently updated first.
    ///
    /// Sends `GET /users/{username}/repos?sort=updated&per_page={n}`.
    /// A single page only; `per_page` is capped at 100 by the API.
    pub async fn fetch_repos(&self, username: &str, per_page: u8) -> Result<Vec<Repo>, GitHubError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, per_page
        );
        let response = self.get(&url).await?;
        Ok(response.json::<Vec<Repo>>().await?)
    }

    /// Fetch one file's contents record from a repository's default branch.
    ///
    /// Sends `GET /repos/{full_name}/contents/{path}`. The returned
    /// `content` field is base64-encoded; decoding is the caller's concern.
    pub async fn fetch_contents(
        &self,
        full_name: &str,
        path: &str,
    ) -> Result<FileContents, GitHubError> {
        let url = format!("{}/repos/{}/contents/{}", self.base_url, full_name, path);
        let response = self.get(&url).await?;
        Ok(response.json::<FileContents>().await?)
    }

    /// Issue a GET and convert non-success statuses into `GitHubError::Status`.
    async fn get(&self, url: &str) -> Result<reqwest::Response, GitHubError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GitHubError::Status { status, message });
        }

        Ok(response)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = GitHubClient::new();
        assert_eq!(client.base_url, GITHUB_API_BASE_URL);
    }

    #[test]
    fn test_client_with_base_url() {
        let custom_url = "http://localhost:8080".to_string();
        let client = GitHubClient::with_base_url(custom_url.clone());
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_client_default() {
        let client = GitHubClient::default();
        assert_eq!(client.base_url, GITHUB_API_BASE_URL);
    }

    #[test]
    fn test_error_display() {
        let err = GitHubError::Status {
            status: 403,
            message: "rate limit exceeded".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("403"));
        assert!(display.contains("rate limit exceeded"));
    }

    // Async tests for HTTP methods
    #[tokio::test]
    async fn test_fetch_user_with_invalid_server() {
        // Use an invalid URL that will fail to connect
        let client = GitHubClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_user("octocat").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_repos_with_invalid_server() {
        let client = GitHubClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_repos("octocat", 100).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_contents_with_invalid_server() {
        let client = GitHubClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_contents("octocat/hello-world", "README.md").await;
        assert!(result.is_err());
    }
}
