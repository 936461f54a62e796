//! Weekly Visits HTTP Client
//!
//! reqwest-backed [`VisitsSource`] for native builds.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::WeeklyVisitsResponse;
use crate::source::{endpoint_url, VisitsSource};

/// Fetches `GET <base_url>/api/weekly-visits`
pub struct HttpVisitsSource {
    client: Client,
    url: String,
}

impl HttpVisitsSource {
    /// Create a source from API configuration
    ///
    /// Without `request_timeout_secs` the client's default timeout applies.
    pub fn new(config: &ApiConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: endpoint_url(&config.base_url, &config.endpoint_path),
        })
    }

    /// Full endpoint URL this source requests
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl VisitsSource for HttpVisitsSource {
    async fn fetch(&self) -> FetchResult<WeeklyVisitsResponse> {
        tracing::debug!(url = %self.url, "Fetching weekly visits");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        WeeklyVisitsResponse::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let source = HttpVisitsSource::new(&ApiConfig::default()).unwrap();
        assert_eq!(source.url(), "http://localhost:5000/api/weekly-visits");
    }

    #[test]
    fn test_custom_base_url() {
        let config = ApiConfig {
            base_url: "https://stats.example.com/".to_string(),
            request_timeout_secs: Some(3),
            ..ApiConfig::default()
        };
        let source = HttpVisitsSource::new(&config).unwrap();
        assert_eq!(source.url(), "https://stats.example.com/api/weekly-visits");
    }
}
