//! On-demand README lookup.
//!
//! Tries a fixed list of candidate filenames against the repository
//! contents endpoint and decodes the first one that resolves. Triggered
//! per repository by explicit user action; nothing is cached.

use crate::github::GitHubClient;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// Candidate filenames, consulted in order; first resolved wins.
const README_CANDIDATES: &[&str] = &["README.md", "readme.md", "Readme.md", "README.MD"];

#[derive(Debug, Error)]
pub enum ReadmeError {
    /// No candidate filename resolved
    #[error("README file not found")]
    NotFound,

    /// A candidate resolved but its payload could not be decoded to text
    #[error("failed to decode README content: {0}")]
    Decode(String),
}

/// Fetch the README text for an owner-qualified repository name.
///
/// A candidate that fails for any reason (missing file, transport error,
/// payload without content, undecodable content) moves on to the next.
/// On exhaustion, a decode failure seen along the way is reported over the
/// generic not-found.
pub async fn fetch_readme(client: &GitHubClient, full_name: &str) -> Result<String, ReadmeError> {
    let mut decode_failure = None;
    for &filename in README_CANDIDATES {
        match client.fetch_contents(full_name, filename).await {
            Ok(contents) => {
                if let Some(encoded) = contents.content {
                    match decode_content(&encoded) {
                        Ok(text) => {
                            tracing::debug!(full_name, filename, "README candidate resolved");
                            return Ok(text);
                        }
                        Err(e) => {
                            tracing::debug!(full_name, filename, "README candidate undecodable: {}", e);
                            decode_failure = Some(e);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::debug!(full_name, filename, "README candidate miss: {}", e);
            }
        }
    }
    Err(decode_failure.unwrap_or(ReadmeError::NotFound))
}

/// Decode the API's base64 `content` field into text.
///
/// The API wraps the encoding in line breaks, which must be stripped
/// before decoding.
fn decode_content(encoded: &str) -> Result<String, ReadmeError> {
    let compact: String = encoded.split_whitespace().collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| ReadmeError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReadmeError::Decode(e.to_string()))
}
