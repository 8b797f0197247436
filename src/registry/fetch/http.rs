//! HTTP template fetching.
//!
//! Provides a blocking HTTP client with a per-request timeout for
//! directory listings (JSON) and raw template files (text).

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches listings and templates over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 10-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("gitignore-gen/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET a URL and return the body as text.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.get(url, "text/plain")?;
        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    /// GET a URL and deserialize the JSON body.
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url, "application/vnd.github+json")?;
        let body = response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))?;
        serde_json::from_str(&body).with_context(|| format!("Invalid JSON from {}", url))
    }

    fn get(&self, url: &str, accept: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", accept)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        Ok(response)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_10_seconds() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(60));
        assert_eq!(fetcher.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn default_creates_fetcher() {
        let fetcher = HttpFetcher::default();
        assert_eq!(fetcher.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn fetch_text_returns_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Rust.gitignore");
            then.status(200).body("/target\n");
        });

        let fetcher = HttpFetcher::new();
        let body = fetcher.fetch_text(&server.url("/Rust.gitignore")).unwrap();
        assert_eq!(body, "/target\n");
    }

    #[test]
    fn fetch_text_fails_on_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let fetcher = HttpFetcher::new();
        let err = fetcher.fetch_text(&server.url("/missing")).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn fetch_json_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/contents/");
            then.status(200).body("not json");
        });

        let fetcher = HttpFetcher::new();
        let result: Result<Vec<serde_json::Value>> =
            fetcher.fetch_json(&server.url("/contents/"));
        assert!(result.is_err());
    }
}
