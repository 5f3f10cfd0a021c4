use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub mod tests;

/// Total budget for one origin round trip: connection, TLS, request and
/// body read.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
#[error("invalid request URL: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// HTTP client for origin images, shared across requests.
#[derive(Clone)]
pub struct OriginFetcher {
    client: Client,
    base_url: String,
}

impl OriginFetcher {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to construct the origin HTTP client.");
        Self { client, base_url }
    }

    /// Fetches `{base_url}{path}` and returns the raw body.
    ///
    /// The origin status is deliberately not inspected: a non-2xx body is
    /// passed along and rejected later by the decoder.
    pub async fn fetch(&self, path: &str) -> Result<Bytes, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!(url = %url, "Fetching origin image.");
        let response = self.client.get(&url).send().await?;
        let body = response.bytes().await?;
        Ok(body)
    }
}
