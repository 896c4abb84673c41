//! HTTP client for the remote rate feed.

use std::time::Duration;

use tracing::info;

use cambio_core::rates::{FetchError, RateSnapshot, RateSource};
use cambio_shared::config::FeedConfig;

use crate::document;

/// Rate feed client over HTTP.
///
/// One client per feed endpoint; fetching returns the endpoint's whole
/// current snapshot. The configured timeout covers the entire request.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl FeedClient {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: config.url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// The endpoint this client reads from.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RateSource for FeedClient {
    async fn fetch(&self) -> Result<RateSnapshot, FetchError> {
        let response = self.http.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let snapshot = document::parse(&body)?;
        info!(entries = snapshot.len(), url = %self.url, "fetched rate snapshot");
        Ok(snapshot)
    }
}
