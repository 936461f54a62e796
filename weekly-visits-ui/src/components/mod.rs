//! UI Components

pub mod chart;
pub mod weekly_panel;

pub use chart::LineChart;
pub use weekly_panel::WeeklyVisitsPanel;
