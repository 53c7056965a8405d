// File: crates/demo/src/fetch.rs
// Summary: Blocking HTTP fetch of a remote dataset behind an injectable client trait.

use std::time::Duration;

use thiserror::Error;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),
    #[error("request timed out fetching {url}")]
    Timeout { url: String },
    #[error("failed to connect to {url}")]
    Connect { url: String },
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to fetch {url}: {message}")]
    Request { url: String, message: String },
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// HTTP client abstraction so callers can swap in a canned response.
pub trait HttpClient {
    /// GET `url` and return the response body.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Default)]
pub struct ReqwestClient;

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else if e.is_connect() {
                FetchError::Connect { url: url.to_string() }
            } else {
                FetchError::Request { url: url.to_string(), message: e.to_string() }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response
            .text()
            .map_err(|e| FetchError::Body { url: url.to_string(), message: e.to_string() })
    }
}

#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
