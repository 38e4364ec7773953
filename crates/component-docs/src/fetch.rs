//! Documentation page fetching over HTTP.
//!
//! One attempt per request, no retries. A 404 maps to `NotFound`; every other
//! failure (non-2xx status, timeout, DNS, connection reset) maps to
//! `FetchFailed`.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{DocsError, DocsResult};

/// Default documentation site the subject pages live under.
pub const DEFAULT_BASE_URL: &str = "https://filamentphp.com/docs/3.x/forms/fields";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const USER_AGENT: &str = concat!("component-docs/", env!("CARGO_PKG_VERSION"));

/// Something that can return the raw markup behind a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> DocsResult<String>;
}

/// Normalize a subject identifier: surrounding whitespace removed, lower-cased.
pub fn normalize_subject(subject: &str) -> String {
    subject.trim().to_lowercase()
}

/// Build the page URL for an already-normalized subject.
pub fn field_url(base_url: &str, subject: &str) -> String {
    format!("{}/{subject}", base_url.trim_end_matches('/'))
}

/// `PageSource` backed by a reqwest client.
#[derive(Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageSource {
    /// Create a page source with the given request timeout.
    pub fn new(timeout_ms: u64) -> Self {
        let timeout = Duration::from_millis(timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> DocsResult<String> {
        tracing::debug!(url, "fetching documentation page");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DocsError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(DocsError::FetchFailed {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        resp.text().await.map_err(|e| self.classify(e))
    }
}

impl HttpPageSource {
    fn classify(&self, e: reqwest::Error) -> DocsError {
        if e.is_timeout() {
            return DocsError::FetchFailed {
                status: None,
                message: format!("request timed out after {} ms", self.timeout.as_millis()),
            };
        }
        DocsError::FetchFailed {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}
