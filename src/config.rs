//! Portfolio configuration.
//!
//! The account to sync is an explicit configuration value rather than a
//! constant baked into the fetch path, so tests and embedders can point the
//! fetcher at arbitrary accounts and mock servers.

use crate::github::GITHUB_API_BASE_URL;
use std::time::Duration;

/// Maximum single-page size the repository listing endpoint allows.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Default interval between background refreshes (5 minutes).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Configuration for a [`PortfolioFetcher`](crate::fetcher::PortfolioFetcher).
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use devfolio::config::PortfolioConfig;
/// use std::time::Duration;
///
/// let config = PortfolioConfig::new("octocat")
///     .with_refresh_interval(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    /// Account whose profile and repositories are synced
    pub username: String,
    /// API base URL (override for tests)
    pub base_url: String,
    /// Repository page size, capped at [`MAX_PAGE_SIZE`]
    pub per_page: u8,
    /// Interval between automatic refreshes
    pub refresh_interval: Duration,
}

impl PortfolioConfig {
    /// Create a config for an account with default settings.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            base_url: GITHUB_API_BASE_URL.to_string(),
            per_page: MAX_PAGE_SIZE,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the repository page size (values above the API maximum are capped).
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.min(MAX_PAGE_SIZE);
        self
    }

    /// Set the automatic refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}
