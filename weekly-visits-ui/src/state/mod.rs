//! State Management
//!
//! Theme observation and the reactive bridge to the panel core.

pub mod panel;
pub mod theme;

pub use panel::{use_weekly_visits, ConsoleSink};
pub use theme::DomThemeWatcher;
