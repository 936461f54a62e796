//! Chart Configuration
//!
//! Declarative description of the weekly visits line chart. The shape
//! mirrors a Chart.js `{ type, data, options }` object so it serializes to
//! something any line-chart renderer (or Chart.js itself) understands.

pub mod layout;

use serde::Serialize;

use crate::models::ChartSeries;
use crate::theme::Palette;

/// Label of the single dataset
pub const DATASET_LABEL: &str = "visit count";

/// Bezier tension of the line
pub const LINE_TENSION: f64 = 0.2;

/// Horizontal padding around the plot area, in pixels
pub const LAYOUT_PADDING: f64 = 20.0;

/// Gap between x tick labels and the plot area, in pixels
pub const X_TICK_PADDING: f64 = 10.0;

/// Full line chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<u64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub layout: Layout,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub padding: Padding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Inset the first/last category by half a slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub ticks: Ticks,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

impl ChartConfig {
    /// Build the chart for a series under the given theme
    pub fn line(series: &ChartSeries, dark: bool) -> Self {
        let palette = Palette::for_theme(dark);

        Self {
            kind: "line",
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![Dataset {
                    label: DATASET_LABEL,
                    data: series.values.clone(),
                    border_color: palette.line,
                    background_color: palette.fill,
                    tension: LINE_TENSION,
                }],
            },
            options: ChartOptions::themed(palette),
        }
    }

    /// The single dataset
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    /// Serialize to Chart.js-shaped JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl ChartOptions {
    fn themed(palette: &Palette) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            layout: Layout {
                padding: Padding {
                    left: LAYOUT_PADDING,
                    right: LAYOUT_PADDING,
                },
            },
            scales: Scales {
                x: Axis {
                    offset: Some(true),
                    begin_at_zero: None,
                    ticks: Ticks {
                        padding: Some(X_TICK_PADDING),
                        color: palette.tick,
                    },
                    grid: Grid {
                        color: palette.x_grid,
                    },
                },
                y: Axis {
                    offset: None,
                    begin_at_zero: Some(true),
                    ticks: Ticks {
                        padding: None,
                        color: palette.tick,
                    },
                    grid: Grid {
                        color: palette.y_grid,
                    },
                },
            },
            plugins: Plugins {
                legend: Legend { display: false },
            },
        }
    }
}
