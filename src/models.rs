use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_branch() -> String {
    "main".to_string()
}

/// A GitHub account profile, as returned by `GET /users/{username}`.
///
/// Unknown fields in the payload are ignored; the profile is replaced
/// wholesale on every successful sync, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubUser {
    /// Account handle (e.g. "octocat")
    pub login: String,
    /// Display name, if the account has one set
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL
    pub avatar_url: String,
    /// Profile bio
    #[serde(default)]
    pub bio: Option<String>,
    /// Free-form location string
    #[serde(default)]
    pub location: Option<String>,
    /// Company affiliation
    #[serde(default)]
    pub company: Option<String>,
    /// External link (the "blog" field; often a personal site)
    #[serde(default)]
    pub blog: Option<String>,
    /// Canonical profile page URL
    pub html_url: String,
    /// Follower count
    #[serde(default)]
    pub followers: u32,
    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u32,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

/// One repository's metadata snapshot, as returned by
/// `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repo {
    /// Unique numeric identifier
    pub id: u64,
    /// Repository name
    pub name: String,
    /// Owner-qualified name (e.g. "octocat/hello-world")
    pub full_name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language, absent for repos GitHub cannot classify
    #[serde(default)]
    pub language: Option<String>,
    /// Topic labels, in the order the API returns them
    #[serde(default)]
    pub topics: Vec<String>,
    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,
    /// Fork count
    #[serde(default)]
    pub forks_count: u64,
    /// Last update time (pushes, metadata edits)
    pub updated_at: DateTime<Utc>,
    /// Home page URL, if one is configured
    #[serde(default)]
    pub homepage: Option<String>,
    /// Canonical web URL
    pub html_url: String,
    /// Default branch name
    #[serde(default = "default_branch")]
    pub default_branch: String,
}

/// Response shape of `GET /repos/{full_name}/contents/{path}` for a file.
///
/// The API wraps `content` in base64 with embedded line breaks; directories
/// and missing files do not produce this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContents {
    /// Base64-encoded file bytes, absent for non-file entries
    #[serde(default)]
    pub content: Option<String>,
    /// Encoding label, "base64" for file responses
    #[serde(default)]
    pub encoding: Option<String>,
}
