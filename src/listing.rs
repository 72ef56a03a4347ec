/// Popup view model: what to show for a lookup outcome
use crate::canonical::{canonicalize, is_lookup_url};
use crate::config::SiteConfig;
use crate::error::LookupError;
use crate::tab_data::{PostRecord, SearchResultSet, TabInfo};
use crate::time_since::time_since_at;

/// Everything one popup open needs, built once and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContext {
    pub tab: TabInfo,
    pub canonical_url: String,
    pub config: SiteConfig,
}

impl PopupContext {
    /// Validate and canonicalize the active tab's URL
    pub fn prepare(tab: TabInfo, config: SiteConfig) -> Result<PopupContext, LookupError> {
        if !is_lookup_url(&tab.url) {
            return Err(LookupError::InvalidUrl(tab.url));
        }

        let canonical_url = canonicalize(&tab.url)?;
        Ok(PopupContext {
            tab,
            canonical_url,
            config,
        })
    }
}

/// An "open this URL in a new tab" action
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAction {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscussionEntry {
    pub title: String,
    pub link: String,
    pub score: u64,
    pub num_comments: u64,
    pub subreddit: String,
    pub author: String,
    pub age: String,
    /// Set only for posts about a different URL than the one searched
    pub related_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    Idle,
    Loading,
    Discussions {
        entries: Vec<DiscussionEntry>,
        see_all: Option<LinkAction>,
    },
    NoDiscussions {
        submit: LinkAction,
    },
    Failed {
        message: String,
    },
    InvalidUrl {
        url: String,
    },
}

/// View for a finished lookup
pub fn render_outcome(
    ctx: &PopupContext,
    outcome: Result<SearchResultSet, LookupError>,
    now_ms: f64,
) -> PopupView {
    match outcome {
        Ok(results) => render_results(ctx, &results, now_ms),
        Err(e) => render_failure(e),
    }
}

/// View for a lookup that never got to (or failed at) the search page
pub fn render_failure(err: LookupError) -> PopupView {
    match err {
        LookupError::InvalidUrl(url) => PopupView::InvalidUrl { url },
        other => PopupView::Failed {
            message: other.to_string(),
        },
    }
}

pub fn render_results(ctx: &PopupContext, results: &SearchResultSet, now_ms: f64) -> PopupView {
    if results.is_empty() {
        // Submission uses the tab's own URL, not the canonical one
        return PopupView::NoDiscussions {
            submit: LinkAction {
                label: "Submit to Reddit".to_string(),
                url: ctx.config.submit_url(&ctx.tab.url, &ctx.tab.title),
            },
        };
    }

    let entries = results
        .posts
        .iter()
        .take(ctx.config.max_listed)
        .map(|post| discussion_entry(&ctx.config, post, now_ms))
        .collect();

    let see_all = (results.len() > ctx.config.max_listed).then(|| LinkAction {
        label: format!("See all {} discussions on Reddit", results.len()),
        url: ctx.config.search_url(&ctx.canonical_url),
    });

    PopupView::Discussions { entries, see_all }
}

fn discussion_entry(config: &SiteConfig, post: &PostRecord, now_ms: f64) -> DiscussionEntry {
    let related_url = if post.is_exact_match {
        None
    } else {
        Some(canonicalize(&post.url).unwrap_or_else(|_| post.url.clone()))
    };

    DiscussionEntry {
        title: post.title.clone(),
        link: config.permalink_url(&post.permalink),
        score: post.score,
        num_comments: post.num_comments,
        subreddit: post.subreddit.clone(),
        author: post.author.clone(),
        age: time_since_at(post.created_utc as f64 * 1000.0, now_ms),
        related_url,
    }
}
