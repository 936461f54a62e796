//! Weekly Visits Panel
//!
//! Card that shows the weekly visits line chart in the current theme.

use leptos::*;

use weekly_visits::Palette;

use super::chart::LineChart;
use crate::state::use_weekly_visits;

#[component]
pub fn WeeklyVisitsPanel() -> impl IntoView {
    let snapshot = use_weekly_visits();

    let chart = Signal::derive(move || snapshot.with(|s| s.chart()));
    let backdrop = Signal::derive(move || snapshot.with(|s| Palette::for_theme(s.dark).canvas_bg));
    let card_class = move || {
        let palette = snapshot.with(|s| Palette::for_theme(s.dark));
        format!("card shadow-sm {}", palette.container_classes())
    };

    view! {
        <div class=card_class style="width: 60%; margin: 2rem auto;">
            <div class="card-body">
                <h2 class="card-title text-center mb-4">"Weekly visit statistics"</h2>
                <div style="height: 400px;">
                    <LineChart config=chart background=backdrop />
                </div>
            </div>
        </div>
    }
}
