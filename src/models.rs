//! Data types for weekly visit counts
//!
//! - `VisitSample`: one day's visit count as delivered by the endpoint
//! - `WeeklyVisitsResponse`: the endpoint body, an ordered list of samples
//! - `ChartSeries`: labels/values projected from the samples for charting

use serde::{Deserialize, Serialize};

use crate::error::{FetchError, FetchResult};

/// A single day's visit count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitSample {
    /// Calendar-day label (ISO-8601 or a locale day string)
    pub date: String,
    /// Number of visits on that day
    pub count: u64,
}

impl VisitSample {
    pub fn new(date: impl Into<String>, count: u64) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

/// Body of `GET /api/weekly-visits`
///
/// Sample order is chronological and is preserved all the way to the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyVisitsResponse {
    pub visits: Vec<VisitSample>,
}

impl WeeklyVisitsResponse {
    /// Parse a response body
    ///
    /// A missing or non-array `visits` key, or a negative/fractional count,
    /// is reported as [`FetchError::Malformed`].
    pub fn from_json(body: &str) -> FetchResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Chart-ready projection of the visit samples
///
/// `labels[i]` and `values[i]` always come from the same sample.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    /// Project samples into labels and values, keeping their order
    ///
    /// Fails with [`FetchError::EmptyVisits`] when there is nothing to draw.
    pub fn from_visits(visits: &[VisitSample]) -> FetchResult<Self> {
        if visits.is_empty() {
            return Err(FetchError::EmptyVisits);
        }

        let (labels, values) = visits
            .iter()
            .map(|v| (v.date.clone(), v.count))
            .unzip();

        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value in the series, if any
    pub fn max_value(&self) -> Option<u64> {
        self.values.iter().copied().max()
    }

    /// Iterate `(label, value)` pairs in chart order
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl TryFrom<&WeeklyVisitsResponse> for ChartSeries {
    type Error = FetchError;

    fn try_from(response: &WeeklyVisitsResponse) -> FetchResult<Self> {
        Self::from_visits(&response.visits)
    }
}
