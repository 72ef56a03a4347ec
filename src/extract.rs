/// Search results page scraping
///
/// The search page is plain HTML with no stable contract, so everything that
/// knows about its markup lives here behind `parse_search_page`.
use std::sync::LazyLock;

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use url::Url;

use crate::error::ElementError;
use crate::tab_data::{DELETED_AUTHOR, PostRecord, SearchResultSet};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

static RESULT: LazyLock<Selector> = LazyLock::new(|| selector(".search-result.search-result-link"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".search-title"));
static SCORE: LazyLock<Selector> = LazyLock::new(|| selector(".search-score"));
static COMMENTS: LazyLock<Selector> = LazyLock::new(|| selector(".search-comments"));
static TIME: LazyLock<Selector> = LazyLock::new(|| selector("time"));
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector(".author"));
static SUBREDDIT: LazyLock<Selector> = LazyLock::new(|| selector(".search-subreddit-link"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector(".search-link"));

/// Parse a search results page into posts, in page order
///
/// Elements that lack a title or community, or whose fields can't be
/// extracted, are logged and skipped. Every post is an exact match since the
/// search targets the URL directly.
pub fn parse_search_page(html: &str) -> SearchResultSet {
    let document = Html::parse_document(html);
    let mut posts = Vec::new();

    for (index, element) in document.select(&RESULT).enumerate() {
        match extract_post(element) {
            Ok(post) => posts.push(post),
            Err(e) => warn!("Skipping search result #{}: {}", index, e),
        }
    }

    debug!("Parsed {} posts from search page", posts.len());
    SearchResultSet::from_posts(posts)
}

fn extract_post(element: ElementRef<'_>) -> Result<PostRecord, ElementError> {
    let title_el = first(element, &TITLE).ok_or(ElementError::MissingField("title"))?;
    let subreddit_el = first(element, &SUBREDDIT).ok_or(ElementError::MissingField("subreddit"))?;

    let title = text_of(title_el);
    if title.is_empty() {
        return Err(ElementError::MissingField("title"));
    }

    let subreddit = text_of(subreddit_el);
    let subreddit = subreddit.strip_prefix("r/").unwrap_or(&subreddit).trim().to_string();
    if subreddit.is_empty() {
        return Err(ElementError::MissingField("subreddit"));
    }

    let href = title_el
        .value()
        .attr("href")
        .ok_or(ElementError::MissingField("permalink"))?;
    let permalink = permalink_path(href)?;

    let score = first(element, &SCORE).map(|el| parse_digits(&text_of(el))).unwrap_or(0);
    let num_comments = first(element, &COMMENTS).map(|el| parse_digits(&text_of(el))).unwrap_or(0);

    let created_utc = first(element, &TIME)
        .and_then(|el| el.value().attr("datetime"))
        .map(parse_timestamp)
        .unwrap_or(0);

    let author = first(element, &AUTHOR)
        .map(text_of)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| DELETED_AUTHOR.to_string());

    let url = first(element, &LINK)
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    Ok(PostRecord {
        title,
        permalink,
        score,
        num_comments,
        created_utc,
        author,
        subreddit,
        url,
        is_exact_match: true,
    })
}

fn first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reduce an absolute permalink to its path; relative ones are kept as-is
fn permalink_path(href: &str) -> Result<String, ElementError> {
    if !href.starts_with("http") {
        return Ok(href.to_string());
    }

    Url::parse(href)
        .map(|u| u.path().to_string())
        .map_err(|source| ElementError::Permalink {
            href: href.to_string(),
            source,
        })
}

/// "1,234 points" -> 1234; anything without digits is 0, overlong runs saturate
fn parse_digits(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

fn parse_timestamp(datetime: &str) -> i64 {
    match OffsetDateTime::parse(datetime, &Rfc3339) {
        Ok(dt) => dt.unix_timestamp(),
        Err(e) => {
            debug!("Unparseable datetime {:?}: {}", datetime, e);
            0
        }
    }
}
