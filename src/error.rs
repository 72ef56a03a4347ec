/// Error types for looking up discussions
use thiserror::Error;

/// Everything that can end a lookup early. Each variant is rendered as a
/// message in the popup; none of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The active tab is not an http(s) page
    #[error("not a valid url: {0}")]
    InvalidUrl(String),

    #[error("malformed url {url}: {reason}")]
    MalformedUrl { url: String, reason: String },

    /// Network failure or a non-success status from the search page
    #[error("{0}")]
    Fetch(String),

    /// The extension host (tabs / manifest bridge) failed
    #[error("browser host error: {0}")]
    Host(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Fetch(format!("Failed to fetch from Reddit: {}", err))
    }
}

/// A single search result element that could not be turned into a post.
/// Contained by the extractor; it never aborts the batch.
#[derive(Debug, Error)]
pub enum ElementError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid permalink {href}: {source}")]
    Permalink {
        href: String,
        #[source]
        source: url::ParseError,
    },
}
