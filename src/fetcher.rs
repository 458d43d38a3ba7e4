//! Data fetcher: owns the poll/refetch lifecycle against the GitHub API.
//!
//! The fetcher keeps the authoritative [`PortfolioSnapshot`] and refreshes
//! it with `fetch_all`: profile and repository list requested concurrently,
//! applied together or not at all. A background task repeats the refresh on
//! a fixed interval until its handle is shut down.

use crate::config::PortfolioConfig;
use crate::github::{GitHubClient, GitHubError};
use crate::models::{GitHubUser, Repo};
use crate::state::{FetchStatus, PortfolioSnapshot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Failure of one refresh, tagged with the stage that failed.
///
/// When both requests fail, the profile stage takes precedence.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch user data")]
    User(#[source] GitHubError),

    #[error("failed to fetch repositories")]
    Repos(#[source] GitHubError),
}

struct Shared {
    snapshot: PortfolioSnapshot,
    /// Sequence number of the last refresh whose result was applied.
    /// Results from older refreshes that complete later are discarded.
    applied_seq: u64,
    /// Refreshes currently in flight; the loading flag is derived from this
    in_flight: u32,
}

struct Inner {
    client: GitHubClient,
    config: PortfolioConfig,
    shared: RwLock<Shared>,
    next_seq: AtomicU64,
}

/// Fetches and owns the portfolio data for one configured account.
///
/// Cheap to clone; clones share the same snapshot.
#[derive(Clone)]
pub struct PortfolioFetcher {
    inner: Arc<Inner>,
}

impl PortfolioFetcher {
    /// Create a fetcher for the account in `config`.
    pub fn new(config: PortfolioConfig) -> Self {
        let client = GitHubClient::with_base_url(config.base_url.clone());
        Self::with_client(config, client)
    }

    /// Create a fetcher with an explicit client (used in tests).
    pub fn with_client(config: PortfolioConfig, client: GitHubClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                config,
                shared: RwLock::new(Shared {
                    snapshot: PortfolioSnapshot::new(),
                    applied_seq: 0,
                    in_flight: 0,
                }),
                next_seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.inner.config
    }

    /// Refresh the snapshot from the API.
    ///
    /// Issues the profile and repository-list requests concurrently. On
    /// success both results replace the prior snapshot in one write; on
    /// failure of either request nothing is replaced, prior data is
    /// retained, and the status carries the failed stage's message.
    ///
    /// Each invocation takes a sequence number; a result whose number is
    /// older than the last applied one is discarded, so an overlapping
    /// stale refresh cannot clobber a newer snapshot.
    pub async fn fetch_all(&self) {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        {
            let mut shared = self.inner.shared.write().await;
            shared.in_flight += 1;
        }

        let result = self.fetch_both().await;

        let mut shared = self.inner.shared.write().await;
        shared.in_flight -= 1;
        if seq <= shared.applied_seq {
            tracing::debug!(seq, applied = shared.applied_seq, "discarding stale refresh");
            return;
        }
        shared.applied_seq = seq;
        match result {
            Ok((user, repos)) => {
                tracing::info!(seq, repos = repos.len(), "portfolio refresh applied");
                shared.snapshot.user = Some(user);
                shared.snapshot.repos = repos;
                shared.snapshot.generation += 1;
                shared.snapshot.status = FetchStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(seq, "portfolio refresh failed: {}", e);
                shared.snapshot.status = FetchStatus::Failed(e.to_string());
            }
        }
    }

    /// Manually trigger a refresh outside the schedule.
    ///
    /// Does not reset or re-phase the periodic timer.
    pub async fn refetch(&self) {
        self.fetch_all().await;
    }

    /// Current snapshot, cloned for the caller.
    ///
    /// The status reads `Loading` while any refresh is in flight.
    pub async fn snapshot(&self) -> PortfolioSnapshot {
        let shared = self.inner.shared.read().await;
        let mut snapshot = shared.snapshot.clone();
        if shared.in_flight > 0 {
            snapshot.status = FetchStatus::Loading;
        }
        snapshot
    }

    /// Start the background refresh: one fetch immediately, then one per
    /// configured interval until the returned handle is shut down.
    ///
    /// No retry or backoff; a failed tick waits for the next one.
    #[must_use = "dropping the handle aborts the refresh task"]
    pub fn start_auto_refresh(&self) -> RefreshHandle {
        let fetcher = self.clone();
        let period = self.inner.config.refresh_interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // first tick completes immediately
                ticker.tick().await;
                fetcher.fetch_all().await;
            }
        });
        RefreshHandle { handle }
    }

    async fn fetch_both(&self) -> Result<(GitHubUser, Vec<Repo>), FetchError> {
        let username = &self.inner.config.username;
        let (user, repos) = tokio::join!(
            self.inner.client.fetch_user(username),
            self.inner
                .client
                .fetch_repos(username, self.inner.config.per_page),
        );
        let user = user.map_err(FetchError::User)?;
        let repos = repos.map_err(FetchError::Repos)?;
        Ok((user, repos))
    }
}

/// Handle to the background refresh task.
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) aborts the
/// task so no further fetches fire after the consumer stops observing.
#[must_use = "dropping the handle aborts the refresh task"]
pub struct RefreshHandle {
    handle: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the background refresh.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
