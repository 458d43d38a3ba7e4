use crate::models::{GitHubUser, Repo};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent synchronization attempt.
///
/// `Loading` is never stored in the snapshot; it is derived from the
/// fetcher's in-flight count so overlapping refreshes cannot clear one
/// another's flag early.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FetchStatus {
    /// No fetch has completed yet
    Idle,
    /// A refresh is in flight
    Loading,
    /// The last refresh succeeded
    Ready,
    /// The last refresh failed; prior data (if any) is retained
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// The failure message, if the last refresh failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// The authoritative local copy of the synced portfolio data.
///
/// Replaced as a unit on every applied refresh: consumers never observe a
/// new profile paired with a stale repository list or vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    /// Profile of the configured account, absent until the first success
    pub user: Option<GitHubUser>,
    /// Repository records, unique by id, in API order
    pub repos: Vec<Repo>,
    /// Status of the most recent refresh
    pub status: FetchStatus,
    /// Incremented on every applied refresh; identity key for derived-view
    /// memoization
    pub generation: u64,
}

impl PortfolioSnapshot {
    pub fn new() -> Self {
        Self {
            user: None,
            repos: Vec::new(),
            status: FetchStatus::Idle,
            generation: 0,
        }
    }
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
