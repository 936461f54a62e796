//! Chart Component
//!
//! Line chart drawn on an HTML5 Canvas from a [`ChartConfig`].

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use weekly_visits::chart::layout::{category_positions, spline_controls, PlotArea, Point, ValueAxis};
use weekly_visits::ChartConfig;

const FONT: &str = "12px sans-serif";
const FONT_SIZE: f64 = 12.0;
const Y_TICK_TARGET: usize = 5;
const Y_TICK_GAP: f64 = 8.0;
const LINE_WIDTH: f64 = 3.0;
const POINT_RADIUS: f64 = 3.0;

/// Canvas line chart sized to its container
///
/// Redraws when the config or backdrop changes or the window is resized.
#[component]
pub fn LineChart(
    #[prop(into)] config: Signal<ChartConfig>,
    #[prop(into)] background: Signal<&'static str>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let resized = create_rw_signal(0u32);

    let resize_handle = window_event_listener(ev::resize, move |_| {
        resized.update(|n| *n = n.wrapping_add(1));
    });
    on_cleanup(move || resize_handle.remove());

    create_effect(move |_| {
        resized.get();
        let config = config.get();
        let background = background.get();

        if let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) {
            let width = container.client_width().max(0) as u32;
            let height = container.client_height().max(0) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            draw_chart(&canvas, &config, background);
        }
    });

    view! {
        <div node_ref=container_ref style="position: relative; height: 100%; width: 100%;">
            <canvas node_ref=canvas_ref style="display: block;" />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig, background: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.set_fill_style(&background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some(dataset) = config.dataset() else {
        return;
    };

    let x_axis = &config.options.scales.x;
    let y_axis = &config.options.scales.y;
    let padding = &config.options.layout.padding;

    let axis = ValueAxis::nice(dataset.data.iter().copied().max().unwrap_or(0), Y_TICK_TARGET);
    let ticks = axis.ticks();

    ctx.set_font(FONT);
    let label_width = ticks
        .iter()
        .filter_map(|value| ctx.measure_text(&format_tick(*value)).ok())
        .map(|metrics| metrics.width())
        .fold(0.0, f64::max);

    let x_tick_padding = x_axis.ticks.padding.unwrap_or(0.0);
    let left = padding.left + label_width + Y_TICK_GAP;
    let top = FONT_SIZE / 2.0;
    let area = PlotArea {
        left,
        top,
        width: (width - padding.right - left).max(0.0),
        height: (height - top - FONT_SIZE - x_tick_padding).max(0.0),
    };

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for value in &ticks {
        let y = axis.to_pixel(*value, &area);
        ctx.set_stroke_style(&y_axis.grid.color.into());
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right(), y);
        ctx.stroke();

        ctx.set_fill_style(&y_axis.ticks.color.into());
        let _ = ctx.fill_text(&format_tick(*value), area.left - Y_TICK_GAP, y);
    }

    // Vertical grid lines with x-axis labels
    let offset = x_axis.offset.unwrap_or(false);
    let xs = category_positions(config.data.labels.len(), &area, offset);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for (x, label) in xs.iter().zip(&config.data.labels) {
        ctx.set_stroke_style(&x_axis.grid.color.into());
        ctx.begin_path();
        ctx.move_to(*x, area.top);
        ctx.line_to(*x, area.bottom());
        ctx.stroke();

        ctx.set_fill_style(&x_axis.ticks.color.into());
        let _ = ctx.fill_text(label, *x, area.bottom() + x_tick_padding);
    }

    let points: Vec<Point> = xs
        .iter()
        .zip(&dataset.data)
        .map(|(x, value)| Point::new(*x, axis.to_pixel(*value as f64, &area)))
        .collect();

    if points.is_empty() {
        return;
    }

    // Smoothed line
    let controls = spline_controls(&points, dataset.tension);
    ctx.set_stroke_style(&dataset.border_color.into());
    ctx.set_line_width(LINE_WIDTH);
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for i in 1..points.len() {
        let (_, out) = controls[i - 1];
        let (incoming, _) = controls[i];
        ctx.bezier_curve_to(out.x, out.y, incoming.x, incoming.y, points[i].x, points[i].y);
    }
    ctx.stroke();

    // Points
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&dataset.background_color.into());
    for point in &points {
        ctx.begin_path();
        let _ = ctx.arc(point.x, point.y, POINT_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.stroke();
    }
}

fn format_tick(value: f64) -> String {
    format!("{}", value.round() as u64)
}
