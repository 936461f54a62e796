//! HTTP API Client
//!
//! Browser-side source for the weekly visits endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;

use weekly_visits::{
    endpoint_url, FetchError, FetchResult, VisitsSource, WeeklyVisitsResponse, DEFAULT_API_BASE,
    WEEKLY_VISITS_PATH,
};

/// Local storage key that overrides the API base URL
pub const API_URL_STORAGE_KEY: &str = "weekly_visits_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetches weekly visits with `gloo-net`
pub struct GlooVisitsSource {
    url: String,
}

impl GlooVisitsSource {
    pub fn new(api_base: &str) -> Self {
        Self {
            url: endpoint_url(api_base, WEEKLY_VISITS_PATH),
        }
    }
}

#[async_trait(?Send)]
impl VisitsSource for GlooVisitsSource {
    async fn fetch(&self) -> FetchResult<WeeklyVisitsResponse> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        WeeklyVisitsResponse::from_json(&body)
    }
}
