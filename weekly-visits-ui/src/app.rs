//! App Root Component

use leptos::*;

use crate::components::WeeklyVisitsPanel;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container py-4">
            <h1 class="text-center mb-4">"Visit monitoring"</h1>
            <WeeklyVisitsPanel />
        </main>
    }
}
