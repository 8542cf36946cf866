//! Remote document fetching
//!
//! Document and text-URI inputs are fetched before the core model is
//! built; the core itself never performs network I/O. The trait exists
//! so integration tests can stub the network away.

use async_trait::async_trait;

use crate::errors::{ApiError, Result};

/// Fetches the body of a remote document by URI
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
  /// Retrieves the document body as text
  ///
  /// # Errors
  /// `ApiError::Fetch` with the failing URI and reason.
  async fn fetch(&self, uri: &str) -> Result<String>;
}

/// Production fetcher backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  /// Creates a fetcher with a fresh client
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
  async fn fetch(&self, uri: &str) -> Result<String> {
    let response = self
      .client
      .get(uri)
      .send()
      .await
      .map_err(|e| ApiError::fetch(uri, e.to_string()))?;

    let response =
      response.error_for_status().map_err(|e| ApiError::fetch(uri, e.to_string()))?;

    response.text().await.map_err(|e| ApiError::fetch(uri, e.to_string()))
  }
}
