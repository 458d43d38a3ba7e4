//! Derived view: filtering, sorting, and aggregate statistics.
//!
//! [`build_view_model`] is a pure function of the repository collection and
//! the user-selected criteria; [`ViewModelCache`] memoizes it so the view is
//! only recomputed when the collection or the criteria actually change.

use crate::models::Repo;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sort order for the repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Most recently updated first (the default)
    #[default]
    Updated,
    /// Most starred first
    Stars,
    /// Name, ascending
    Name,
}

/// User-selected language filter and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Language to keep; empty string means no filter
    pub language: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Keep only repositories whose primary language is `language`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// The derived structure the presentation layer renders.
///
/// `repos` reflects the active filter and sort; `languages` and the totals
/// are computed over the full unfiltered collection, so the facet list and
/// the header statistics always describe the whole profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    /// Filtered, sorted repository sequence
    pub repos: Vec<Repo>,
    /// Every distinct language in the full collection, sorted ascending
    pub languages: Vec<String>,
    /// Star total over the full collection
    pub total_stars: u64,
    /// Fork total over the full collection
    pub total_forks: u64,
}

/// Build the view model for a repository collection and criteria.
///
/// Pure and deterministic: equal inputs always produce equal output. An
/// empty collection or a filter matching nothing yields empty results, not
/// an error.
pub fn build_view_model(repos: &[Repo], criteria: &FilterCriteria) -> ViewModel {
    let mut filtered: Vec<Repo> = repos
        .iter()
        .filter(|repo| {
            criteria.language.is_empty()
                || repo.language.as_deref() == Some(criteria.language.as_str())
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable: ties keep their relative order from the input.
    match criteria.sort {
        SortKey::Updated => filtered.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::Stars => filtered.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        SortKey::Name => filtered.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }

    let languages: Vec<String> = repos
        .iter()
        .filter_map(|repo| repo.language.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let total_stars = repos.iter().map(|repo| repo.stargazers_count).sum();
    let total_forks = repos.iter().map(|repo| repo.forks_count).sum();

    ViewModel {
        repos: filtered,
        languages,
        total_stars,
        total_forks,
    }
}

/// Caseless name comparison, exact bytes as tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Equality-keyed cache around [`build_view_model`].
///
/// Keyed on the snapshot generation (collection identity) plus the criteria
/// value: the view is rebuilt only when one of the inputs changed.
#[derive(Debug, Default)]
pub struct ViewModelCache {
    key: Option<(u64, FilterCriteria)>,
    value: ViewModel,
}

impl ViewModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached view, rebuilding it if `generation` or `criteria`
    /// differ from the cached key.
    pub fn get_or_build(
        &mut self,
        generation: u64,
        repos: &[Repo],
        criteria: &FilterCriteria,
    ) -> &ViewModel {
        let key = (generation, criteria.clone());
        if self.key.as_ref() != Some(&key) {
            self.value = build_view_model(repos, criteria);
            self.key = Some(key);
        }
        &self.value
    }
}
