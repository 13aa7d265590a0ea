//! HTTP fetcher
//!
//! One GET per URL with browser-like headers, a bounded timeout and
//! automatic redirect following. Failures come back as values; nothing
//! below this boundary raises into the crawl loop. There are no retries:
//! a failed URL is terminal for the current crawl pass.

use crate::config::FetcherConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";
const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate, br";
const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body
        body: String,
    },

    /// Server answered with a non-2xx status
    HttpStatus {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (timeout, connection refused, TLS, ...)
    Network {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for every fetch in a crawl.
///
/// Browser-like default headers, automatic redirects up to a small limit,
/// and gzip/brotli decompression.
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
    );
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static(ACCEPT_ENCODING_VALUE),
    );

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once.
///
/// Non-2xx statuses and network errors are classified into
/// [`FetchOutcome`] variants carrying the original error text.
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchOutcome::HttpStatus {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchOutcome::Network {
                    error: format!("failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchOutcome::Network {
                    error: format!("request timeout: {}", e),
                }
            } else if e.is_connect() {
                FetchOutcome::Network {
                    error: format!("connection failed: {}", e),
                }
            } else if e.is_redirect() {
                FetchOutcome::Network {
                    error: format!("redirect error: {}", e),
                }
            } else {
                FetchOutcome::Network {
                    error: e.to_string(),
                }
            }
        }
    }
}
