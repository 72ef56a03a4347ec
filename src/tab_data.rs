/// Data structures for What Reddit Says
use serde::{Deserialize, Serialize};

/// Sentinel author for missing or deleted accounts
pub const DELETED_AUTHOR: &str = "[deleted]";

/// The active browser tab, as reported by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub url: String,
    pub title: String,
}

impl TabInfo {
    pub fn new(url: String, title: String) -> TabInfo {
        TabInfo { url, title }
    }
}

/// Extension metadata read from the manifest
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub version: String,
    #[serde(default)]
    pub homepage_url: Option<String>,
}

/// One submission found on the search page
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub title: String,
    /// Site-relative path, e.g. `/r/rust/comments/abc/title/`
    pub permalink: String,
    pub score: u64,
    pub num_comments: u64,
    /// Seconds since the epoch, 0 when the page had no usable timestamp
    pub created_utc: i64,
    pub author: String,
    pub subreddit: String,
    /// The submitted link; empty for self posts
    pub url: String,
    pub is_exact_match: bool,
}

/// Posts in page order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultSet {
    pub posts: Vec<PostRecord>,
    pub exact_match_count: usize,
}

impl SearchResultSet {
    pub fn from_posts(posts: Vec<PostRecord>) -> SearchResultSet {
        let exact_match_count = posts.iter().filter(|p| p.is_exact_match).count();
        SearchResultSet {
            posts,
            exact_match_count,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_post(title: &str, exact: bool) -> PostRecord {
        PostRecord {
            title: title.to_string(),
            permalink: "/r/rust/comments/abc/post/".to_string(),
            score: 10,
            num_comments: 2,
            created_utc: 1_698_508_200,
            author: "ferris".to_string(),
            subreddit: "rust".to_string(),
            url: "https://example.com/post".to_string(),
            is_exact_match: exact,
        }
    }

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new("https://google.com".to_string(), "Google".to_string());

        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.title, "Google");
    }

    #[test]
    fn test_result_set_counts_exact_matches() {
        let set = SearchResultSet::from_posts(vec![
            create_test_post("a", true),
            create_test_post("b", false),
            create_test_post("c", true),
        ]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.exact_match_count, 2);
        assert!(!set.is_empty());
        assert!(SearchResultSet::default().is_empty());
    }

    #[test]
    fn test_extension_info_from_manifest() {
        let manifest = r#"{
            "manifest_version": 3,
            "name": "What Reddit Says",
            "version": "1.4.0",
            "homepage_url": "https://github.com/example/what-reddit-says"
        }"#;

        let info: ExtensionInfo = serde_json::from_str(manifest).unwrap();

        assert_eq!(info.version, "1.4.0");
        assert_eq!(
            info.homepage_url.as_deref(),
            Some("https://github.com/example/what-reddit-says")
        );

        let bare: ExtensionInfo = serde_json::from_str(r#"{"version": "0.1"}"#).unwrap();
        assert_eq!(bare.homepage_url, None);
    }
}
