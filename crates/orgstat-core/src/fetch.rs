// SPDX-License-Identifier: Apache-2.0

//! Retrieval of the organization listing page.
//!
//! One GET, no retries. The request is bounded by the configured timeout
//! and any non-2xx answer is an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::GitHubConfig;
use crate::error::OrgstatError;

/// Source of the raw listing document.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the document body as text.
    async fn fetch(&self) -> crate::Result<String>;
}

/// Fetches the listing page over HTTP.
pub struct HttpFetcher {
    /// HTTP client with configured timeout.
    http: Client,
    /// Listing page URL.
    url: String,
}

impl HttpFetcher {
    /// Creates a fetcher for the organization named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `OrgstatError::Fetch` if the HTTP client cannot be built.
    pub fn new(config: &GitHubConfig) -> crate::Result<Self> {
        let url = config.listing_url();
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| OrgstatError::Fetch {
                url: url.clone(),
                source,
            })?;

        Ok(Self { http, url })
    }

    /// URL this fetcher requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> crate::Result<String> {
        let fetch_error = |source: reqwest::Error| OrgstatError::Fetch {
            url: self.url.clone(),
            source,
        };

        let response = self.http.get(&self.url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrgstatError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(fetch_error)?;
        debug!(bytes = body.len(), "Fetched listing page");
        Ok(body)
    }
}
