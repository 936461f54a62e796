//! Panel State
//!
//! Mounts the weekly visits panel core for a component and mirrors its
//! snapshots into a Leptos signal.

use leptos::*;
use std::rc::Rc;

use weekly_visits::{
    DiagnosticSink, FetchError, Panel, PanelHooks, PanelSnapshot, ResponseOrdering,
};

use super::theme::DomThemeWatcher;
use crate::api::{get_api_base, GlooVisitsSource};

/// Reports panel problems to the browser console
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, error: &FetchError) {
        match error {
            FetchError::EmptyVisits => {
                web_sys::console::warn_1(&"No visit data to render".into());
            }
            other => {
                web_sys::console::error_1(&format!("Failed to load weekly visits: {}", other).into());
            }
        }
    }
}

/// Mount a panel for the current reactive owner
///
/// The panel unmounts when the owner is cleaned up, so late fetch results
/// never touch a disposed component.
pub fn use_weekly_visits() -> ReadSignal<PanelSnapshot> {
    let (snapshot, set_snapshot) = create_signal(PanelSnapshot::default());

    let source = Rc::new(GlooVisitsSource::new(&get_api_base()));
    let hooks = PanelHooks::new(spawn_local, move |next: &PanelSnapshot| {
        set_snapshot.set(next.clone())
    })
    .diagnostics(ConsoleSink);

    let panel = Panel::mount(
        &DomThemeWatcher::new(),
        source,
        hooks,
        ResponseOrdering::default(),
    );
    on_cleanup(move || panel.unmount());

    snapshot
}
