/// Site endpoints and lookup settings

/// Substrings that mark a query parameter as tracking noise
pub const BLACKLISTED_PARAMS: &[&str] = &["utm_", "clid", "ref"];

pub const SEARCH_ENDPOINT: &str = "https://old.reddit.com/search";
pub const SUBMIT_ENDPOINT: &str = "https://www.reddit.com/submit";
pub const PERMALINK_BASE: &str = "https://reddit.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; WhatRedditSays/1.0)";

/// How many discussions the popup lists before offering "see all"
pub const MAX_LISTED: usize = 4;

/// Where to search, where to submit, and how much to show.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub search_endpoint: String,
    pub submit_endpoint: String,
    pub permalink_base: String,
    pub user_agent: String,
    pub max_listed: usize,
}

impl SiteConfig {
    /// Search page URL for a canonical URL: `<endpoint>?q=url:<encoded>`
    pub fn search_url(&self, canonical_url: &str) -> String {
        format!(
            "{}?q=url:{}",
            self.search_endpoint,
            urlencoding::encode(canonical_url)
        )
    }

    /// Pre-filled submission link for a page nobody has posted yet
    pub fn submit_url(&self, url: &str, title: &str) -> String {
        format!(
            "{}?url={}&title={}",
            self.submit_endpoint,
            urlencoding::encode(url),
            urlencoding::encode(title)
        )
    }

    pub fn permalink_url(&self, permalink: &str) -> String {
        format!("{}{}", self.permalink_base, permalink)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            search_endpoint: SEARCH_ENDPOINT.to_string(),
            submit_endpoint: SUBMIT_ENDPOINT.to_string(),
            permalink_base: PERMALINK_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            max_listed: MAX_LISTED,
        }
    }
}
