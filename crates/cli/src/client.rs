//! HTTP client for the catalog provider.

use std::time::Duration;

use catalog::CatalogSnapshot;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when fetching the catalog
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog provider answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid catalog response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for `GET /movies`
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the provider at `base_url`, e.g. `http://localhost:8000`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    /// Fetch the whole catalog in one round trip.
    ///
    /// Any non-success status is an error; there is no retry.
    pub async fn fetch_catalog(&self) -> Result<CatalogSnapshot, ClientError> {
        let url = self.catalog_url();
        debug!("Fetching catalog from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let snapshot: CatalogSnapshot = response
            .json()
            .await
            .map_err(|source| ClientError::Decode {
                url: url.clone(),
                source,
            })?;

        info!(
            "Fetched {} movies and {} genres",
            snapshot.movies.len(),
            snapshot.genres.len()
        );
        Ok(snapshot)
    }
}
