/// Discussion lookup against the search page
use log::debug;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;

use crate::config::SiteConfig;
use crate::error::LookupError;
use crate::extract::parse_search_page;
use crate::tab_data::SearchResultSet;

/// Fetch and parse the discussions for an already-canonical URL
///
/// One request, no retries. Network failures and non-success statuses come
/// back as `LookupError::Fetch`.
pub async fn fetch_discussions(
    config: &SiteConfig,
    canonical_url: &str,
) -> Result<SearchResultSet, LookupError> {
    let search_url = config.search_url(canonical_url);
    debug!("Searching discussions: {}", search_url);

    let response = reqwest::Client::new()
        .get(&search_url)
        .header(USER_AGENT, config.user_agent.as_str())
        .send()
        .await?;

    check_status(response.status())?;

    let html = response.text().await?;
    Ok(parse_search_page(&html))
}

fn check_status(status: StatusCode) -> Result<(), LookupError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LookupError::Fetch(format!(
            "Failed to fetch from Reddit (HTTP {})",
            status
        )))
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod fetch_tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const FIXTURE: &str = include_str!("../tests/fixtures/old_reddit_search.html");

    /// Answer one request with `status_line` and `body`, returning the raw request head
    async fn serve_once(listener: TcpListener, status_line: &str, body: &str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    }

    async fn local_config() -> (TcpListener, SiteConfig) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = SiteConfig {
            search_endpoint: format!("http://{}/search", listener.local_addr().unwrap()),
            ..SiteConfig::default()
        };
        (listener, config)
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_rejected() {
        let (listener, config) = local_config().await;

        let (request, outcome) = tokio::join!(
            serve_once(listener, "500 Internal Server Error", ""),
            fetch_discussions(&config, "example.com/?id=1"),
        );

        assert_eq!(
            outcome,
            Err(LookupError::Fetch(
                "Failed to fetch from Reddit (HTTP 500 Internal Server Error)".to_string()
            ))
        );
        assert!(request.starts_with("GET /search?q=url:example.com%2F%3Fid%3D1 HTTP/1.1"));
        assert!(request.to_lowercase().contains("user-agent: mozilla/5.0 (compatible; whatredditsays/1.0)"));
    }

    #[tokio::test]
    async fn test_fetch_parses_search_page() {
        let (listener, config) = local_config().await;

        let (_, outcome) = tokio::join!(
            serve_once(listener, "200 OK", FIXTURE),
            fetch_discussions(&config, "example.com"),
        );

        let results = outcome.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results.exact_match_count, 3);
        assert_eq!(results.posts[0].title, "Example Domain turns 30");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_rejected() {
        let (listener, config) = local_config().await;
        drop(listener);

        let outcome = fetch_discussions(&config, "example.com").await;

        match outcome {
            Err(LookupError::Fetch(message)) => {
                assert!(message.starts_with("Failed to fetch from Reddit"))
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
    }
}
