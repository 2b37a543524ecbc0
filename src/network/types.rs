use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

/// HTTP response handed back by a [`FetchFn`].
#[derive(Debug, Clone, Default)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub url: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport callback performing a single GET request for a URL.
/// Transport failures come back as `Err(message)`.
pub type FetchFn = Arc<dyn Fn(String)
    -> Pin<Box<dyn Future<Output = Result<FetchResponse, String>> + Send>> + Send + Sync>;

/// Configuration for network access
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// List of allowed URL prefixes (origin + optional path)
    pub allowed_url_prefixes: Vec<String>,
    /// Bypass allow-list
    pub dangerously_allow_full_internet_access: bool,
    /// Max redirects (default: 20)
    pub max_redirects: Option<usize>,
}

/// Network error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Network access denied: URL not in allow-list: {url}")]
    AccessDenied { url: String },

    #[error("Too many redirects (max: {max})")]
    TooManyRedirects { max: usize },

    #[error("Failed to fetch URL: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("Fetch error: {message}")]
    FetchError { message: String },

    #[error("network access is not configured")]
    NotConfigured,
}
