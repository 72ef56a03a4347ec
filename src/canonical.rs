/// URL canonicalization for search matching
use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use url::form_urlencoded;

use crate::config::BLACKLISTED_PARAMS;
use crate::error::LookupError;

static LOOKUP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+$").expect("lookup url pattern"));
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+:)?//").expect("scheme pattern"));
static FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#.+$").expect("fragment pattern"));
static INDEX_PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"index\.(php|html?)").expect("index page pattern"));

/// Whether a tab URL is something we can look up (http or https with content)
pub fn is_lookup_url(url: &str) -> bool {
    LOOKUP_URL.is_match(url)
}

/// Canonicalize a URL into the form used for the `url:` search
///
/// Algorithm:
/// 1. If there is a query string, drop every parameter whose key contains a
///    blacklisted substring (`utm_`, `clid`, `ref`), keeping the order of the rest
/// 2. Strip the scheme and `//`
/// 3. Strip the fragment
/// 4. Strip one `index.php` / `index.html` / `index.htm`
/// 5. Strip trailing slashes, but only for bare domains
///
/// Examples:
/// - https://example.com/?utm_source=x&id=1 → example.com/?id=1
/// - https://example.com/ → example.com
/// - https://example.com/a/b/ → example.com/a/b/
pub fn canonicalize(url: &str) -> Result<String, LookupError> {
    let cleaned = if url.contains('?') {
        strip_tracking_params(url)?
    } else {
        url.to_string()
    };

    let no_scheme = SCHEME.replace(&cleaned, "");
    let no_fragment = FRAGMENT.replace(&no_scheme, "");
    let no_index = INDEX_PAGE.replace(&no_fragment, "");

    // example.com/ -> example.com, but example.com/a/ stays
    if no_index.ends_with('/') && no_index.split('/').count() < 3 {
        Ok(no_index.trim_end_matches('/').to_string())
    } else {
        Ok(no_index.into_owned())
    }
}

/// Remove tracking parameters and re-serialize the query
fn strip_tracking_params(url: &str) -> Result<String, LookupError> {
    let mut parsed = parse_lenient(url)?;

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&kept)
            .finish();
        parsed.set_query(Some(&query));
    }

    Ok(parsed.to_string())
}

/// Parse a URL, tolerating the scheme-less form canonicalization produces.
/// The added scheme is stripped again by the next step.
fn parse_lenient(url: &str) -> Result<Url, LookupError> {
    let malformed = |err: url::ParseError| LookupError::MalformedUrl {
        url: url.to_string(),
        reason: err.to_string(),
    };

    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let prefix = if url.starts_with("//") { "http:" } else { "http://" };
            Url::parse(&format!("{}{}", prefix, url)).map_err(malformed)
        }
        Err(err) => Err(malformed(err)),
    }
}

fn is_tracking_param(key: &str) -> bool {
    BLACKLISTED_PARAMS.iter().any(|entry| key.contains(entry))
}
