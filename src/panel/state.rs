//! Panel state machine
//!
//! Synchronous core of the weekly visits panel. The driver feeds it theme
//! notifications and fetch completions; it decides what changes and hands
//! back tickets and outcomes. It never performs I/O itself.

use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{ChartSeries, WeeklyVisitsResponse};

/// How completions of overlapping fetches are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Every completion applies as it resolves; the last one to resolve wins
    #[default]
    LastResolved,
    /// Only the most recently issued fetch may apply; older ones are dropped
    LatestIssued,
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    /// Theme that triggered the fetch
    pub dark: bool,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Series replaced
    Applied,
    /// Series untouched; the error deserves one diagnostic
    Rejected(FetchError),
    /// Series untouched; nothing to report
    Discarded(DiscardReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The panel was unmounted before the fetch resolved
    Unmounted,
    /// A newer fetch has been issued since
    Superseded { latest: u64 },
}

/// Immutable view handed to renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub dark: bool,
    pub series: ChartSeries,
}

impl PanelSnapshot {
    pub fn chart(&self) -> ChartConfig {
        ChartConfig::line(&self.series, self.dark)
    }
}

/// Per-mount panel state
#[derive(Debug)]
pub struct PanelState {
    dark: bool,
    series: ChartSeries,
    mounted: bool,
    issued: u64,
    ordering: ResponseOrdering,
}

impl PanelState {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            dark: false,
            series: ChartSeries::default(),
            mounted: true,
            issued: 0,
            ordering,
        }
    }

    /// Record a theme notification and issue the fetch it triggers
    ///
    /// Returns `None` once unmounted.
    pub fn theme_changed(&mut self, dark: bool) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }

        self.dark = dark;
        self.issued += 1;
        Some(FetchTicket {
            seq: self.issued,
            dark,
        })
    }

    /// Apply the outcome of a fetch, all or nothing
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: FetchResult<WeeklyVisitsResponse>,
    ) -> Completion {
        if !self.mounted {
            return Completion::Discarded(DiscardReason::Unmounted);
        }

        if self.ordering == ResponseOrdering::LatestIssued && ticket.seq != self.issued {
            return Completion::Discarded(DiscardReason::Superseded {
                latest: self.issued,
            });
        }

        match result.and_then(|response| ChartSeries::try_from(&response)) {
            Ok(series) => {
                self.series = series;
                Completion::Applied
            }
            Err(e) => Completion::Rejected(e),
        }
    }

    /// Stop accepting theme changes and fetch results
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    /// Number of fetches issued so far
    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            dark: self.dark,
            series: self.series.clone(),
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(ResponseOrdering::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitSample;

    fn response(samples: &[(&str, u64)]) -> WeeklyVisitsResponse {
        WeeklyVisitsResponse {
            visits: samples
                .iter()
                .map(|(date, count)| VisitSample::new(*date, *count))
                .collect(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = PanelState::default();
        assert!(!state.dark());
        assert!(state.series().is_empty());
        assert!(state.is_mounted());
        assert_eq!(state.issued(), 0);
    }

    #[test]
    fn test_theme_change_issues_tickets() {
        let mut state = PanelState::default();

        let first = state.theme_changed(false).unwrap();
        let second = state.theme_changed(true).unwrap();

        assert_eq!(first.seq, 1);
        assert_eq!(second, FetchTicket { seq: 2, dark: true });
        assert!(state.dark());
    }

    #[test]
    fn test_success_replaces_series() {
        let mut state = PanelState::default();
        let ticket = state.theme_changed(false).unwrap();

        let outcome = state.complete(ticket, Ok(response(&[("2024-05-01", 12), ("2024-05-02", 7)])));

        assert_eq!(outcome, Completion::Applied);
        assert_eq!(state.series().labels, vec!["2024-05-01", "2024-05-02"]);
        assert_eq!(state.series().values, vec![12, 7]);
    }

    #[test]
    fn test_failures_keep_last_good_series() {
        let mut state = PanelState::default();
        let ticket = state.theme_changed(false).unwrap();
        state.complete(ticket, Ok(response(&[("Mon", 3)])));
        let before = state.series().clone();

        let ticket = state.theme_changed(true).unwrap();
        let outcome = state.complete(ticket, Ok(response(&[])));
        assert_eq!(outcome, Completion::Rejected(FetchError::EmptyVisits));
        assert_eq!(state.series(), &before);

        let ticket = state.theme_changed(false).unwrap();
        let outcome = state.complete(ticket, Err(FetchError::Malformed("eof".into())));
        assert!(matches!(outcome, Completion::Rejected(FetchError::Malformed(_))));
        assert_eq!(state.series(), &before);

        let ticket = state.theme_changed(true).unwrap();
        let outcome = state.complete(ticket, Err(FetchError::HttpStatus(500)));
        assert_eq!(outcome, Completion::Rejected(FetchError::HttpStatus(500)));
        assert_eq!(state.series(), &before);
    }

    #[test]
    fn test_unmount_discards_results() {
        let mut state = PanelState::default();
        let ticket = state.theme_changed(false).unwrap();
        state.unmount();

        let outcome = state.complete(ticket, Ok(response(&[("Mon", 3)])));

        assert_eq!(outcome, Completion::Discarded(DiscardReason::Unmounted));
        assert!(state.series().is_empty());
        assert!(state.theme_changed(true).is_none());
        assert!(!state.dark());
    }

    #[test]
    fn test_last_resolved_ordering() {
        let mut state = PanelState::new(ResponseOrdering::LastResolved);
        let older = state.theme_changed(false).unwrap();
        let newer = state.theme_changed(true).unwrap();

        state.complete(newer, Ok(response(&[("new", 2)])));
        let outcome = state.complete(older, Ok(response(&[("old", 1)])));

        assert_eq!(outcome, Completion::Applied);
        assert_eq!(state.series().labels, vec!["old"]);
    }

    #[test]
    fn test_latest_issued_ordering() {
        let mut state = PanelState::new(ResponseOrdering::LatestIssued);
        let older = state.theme_changed(false).unwrap();
        let newer = state.theme_changed(true).unwrap();

        state.complete(newer, Ok(response(&[("new", 2)])));
        let outcome = state.complete(older, Ok(response(&[("old", 1)])));

        assert_eq!(
            outcome,
            Completion::Discarded(DiscardReason::Superseded { latest: 2 })
        );
        assert_eq!(state.series().labels, vec!["new"]);
    }

    #[test]
    fn test_ordering_names() {
        let ordering: ResponseOrdering = serde_json::from_str("\"latest-issued\"").unwrap();
        assert_eq!(ordering, ResponseOrdering::LatestIssued);
        assert_eq!(
            serde_json::to_string(&ResponseOrdering::LastResolved).unwrap(),
            "\"last-resolved\""
        );
    }

    #[test]
    fn test_snapshot_chart() {
        let mut state = PanelState::default();
        let ticket = state.theme_changed(true).unwrap();
        state.complete(ticket, Ok(response(&[("2024-05-01", 12)])));

        let chart = state.snapshot().chart();
        assert_eq!(chart.dataset().unwrap().border_color, "rgba(255,205,86,1)");
        assert_eq!(chart.data.labels, vec!["2024-05-01"]);
    }
}
