//! # Weekly Visits
//!
//! Theme-aware weekly visit-count dashboard: fetches `{ "visits": [...] }`
//! from an HTTP endpoint and describes it as a line chart whose colors follow
//! the page's dark-mode marker.
//!
//! ## Modules
//!
//! - [`theme`]: dark-mode marker capability, polling watcher and palettes
//! - [`panel`]: panel state machine and the driver that mounts it
//! - [`chart`]: declarative chart configuration and plot geometry
//! - [`models`]: endpoint body and chart series types
//! - [`client`]: reqwest visits source (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use weekly_visits::{Config, HttpVisitsSource, Panel, PanelHooks, PollingThemeWatcher};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let source = Rc::new(HttpVisitsSource::new(&config.api)?);
//!     let watcher = PollingThemeWatcher::from_file("/tmp/root-classes");
//!
//!     tokio::task::LocalSet::new()
//!         .run_until(async move {
//!             let hooks = PanelHooks::new(
//!                 |fut| drop(tokio::task::spawn_local(fut)),
//!                 |snapshot| println!("{}", snapshot.chart().to_json()),
//!             );
//!             let _panel = Panel::mount(&watcher, source, hooks, config.panel.response_ordering);
//!             tokio::signal::ctrl_c().await
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod source;
pub mod theme;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod logging;

pub use chart::ChartConfig;
pub use config::{ApiConfig, Config, LoggingConfig, PanelConfig, ThemeConfig};
#[cfg(feature = "native")]
pub use config::ConfigError;
pub use error::{ErrorKind, FetchError, FetchResult};
pub use models::{ChartSeries, VisitSample, WeeklyVisitsResponse};
pub use panel::{
    Completion, DiagnosticSink, Panel, PanelHooks, PanelSnapshot, PanelState, ResponseOrdering,
    TracingSink,
};
pub use source::{endpoint_url, VisitsSource, DEFAULT_API_BASE, WEEKLY_VISITS_PATH};
pub use theme::{marker_present, Palette, Subscription, ThemeWatcher, DEFAULT_MARKER_CLASS};

#[cfg(feature = "native")]
pub use client::HttpVisitsSource;
#[cfg(feature = "native")]
pub use theme::PollingThemeWatcher;
