//! Visits data source capability

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::WeeklyVisitsResponse;

/// Path of the weekly visits endpoint, relative to the API base URL
pub const WEEKLY_VISITS_PATH: &str = "/api/weekly-visits";

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Anything that can load the weekly visits body
///
/// One call is one attempt: implementations do not retry.
#[async_trait(?Send)]
pub trait VisitsSource {
    async fn fetch(&self) -> FetchResult<WeeklyVisitsResponse>;
}

/// Join a base URL and an endpoint path with exactly one slash between them
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(DEFAULT_API_BASE, WEEKLY_VISITS_PATH),
            "http://localhost:5000/api/weekly-visits"
        );
        assert_eq!(
            endpoint_url("https://stats.example.com/", "api/weekly-visits"),
            "https://stats.example.com/api/weekly-visits"
        );
    }
}
