//! Weekly Visits Panel
//!
//! Wires the [`PanelState`] machine to its collaborators:
//!
//! - a [`ThemeWatcher`] whose notifications update the theme and trigger a fetch
//! - a [`VisitsSource`] that performs the fetch
//! - [`PanelHooks`]: a local spawner, a render callback and a diagnostic sink
//!
//! Everything runs on one thread. State is borrowed only for the duration of
//! a transition and never while the render callback or diagnostics run.

pub mod diagnostics;
pub mod state;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use state::{
    Completion, DiscardReason, FetchTicket, PanelSnapshot, PanelState, ResponseOrdering,
};

use futures_util::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::FetchResult;
use crate::models::WeeklyVisitsResponse;
use crate::source::VisitsSource;
use crate::theme::{Subscription, ThemeWatcher};

/// Runs a future on the local executor
pub type Spawner = Box<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Receives the panel view after every applied transition
pub type RenderFn = Box<dyn Fn(&PanelSnapshot)>;

/// Environment-specific pieces the panel needs
pub struct PanelHooks {
    spawn: Spawner,
    render: RenderFn,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl PanelHooks {
    /// Hooks reporting diagnostics through `tracing`
    pub fn new(
        spawn: impl Fn(LocalBoxFuture<'static, ()>) + 'static,
        render: impl Fn(&PanelSnapshot) + 'static,
    ) -> Self {
        Self {
            spawn: Box::new(spawn),
            render: Box::new(render),
            diagnostics: Box::new(TracingSink),
        }
    }

    /// Builder method: replace the diagnostic sink
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }
}

struct PanelInner {
    state: RefCell<PanelState>,
    source: Rc<dyn VisitsSource>,
    hooks: PanelHooks,
}

impl PanelInner {
    fn on_theme(panel: &Rc<Self>, dark: bool) {
        let ticket = panel.state.borrow_mut().theme_changed(dark);
        let Some(ticket) = ticket else {
            return;
        };

        tracing::debug!(dark, seq = ticket.seq, "Theme changed, fetching weekly visits");
        panel.render();

        let source = Rc::clone(&panel.source);
        let weak = Rc::downgrade(panel);
        (panel.hooks.spawn)(Box::pin(async move {
            let result = source.fetch().await;
            match weak.upgrade() {
                Some(panel) => panel.finish(ticket, result),
                None => tracing::debug!(seq = ticket.seq, "Panel dropped before fetch resolved"),
            }
        }));
    }

    fn finish(&self, ticket: FetchTicket, result: FetchResult<WeeklyVisitsResponse>) {
        let completion = self.state.borrow_mut().complete(ticket, result);

        match completion {
            Completion::Applied => {
                tracing::debug!(seq = ticket.seq, "Weekly visits applied");
                self.render();
            }
            Completion::Rejected(error) => self.hooks.diagnostics.report(&error),
            Completion::Discarded(reason) => {
                tracing::debug!(seq = ticket.seq, ?reason, "Weekly visits response discarded");
            }
        }
    }

    fn render(&self) {
        let snapshot = self.state.borrow().snapshot();
        (self.hooks.render)(&snapshot);
    }
}

/// A mounted weekly visits panel
///
/// Unmounts on drop.
pub struct Panel {
    inner: Rc<PanelInner>,
    subscription: RefCell<Subscription>,
}

impl Panel {
    /// Mount the panel: subscribe to the theme and start the first fetch
    ///
    /// The watcher reports the current theme immediately, so the first
    /// render and fetch happen before this returns.
    pub fn mount<W>(
        watcher: &W,
        source: Rc<dyn VisitsSource>,
        hooks: PanelHooks,
        ordering: ResponseOrdering,
    ) -> Self
    where
        W: ThemeWatcher + ?Sized,
    {
        let inner = Rc::new(PanelInner {
            state: RefCell::new(PanelState::new(ordering)),
            source,
            hooks,
        });

        let panel = Rc::downgrade(&inner);
        let subscription = watcher.subscribe(Box::new(move |dark| {
            if let Some(panel) = panel.upgrade() {
                PanelInner::on_theme(&panel, dark);
            }
        }));

        Self {
            inner,
            subscription: RefCell::new(subscription),
        }
    }

    /// Detach from the theme watcher and ignore pending fetches. Idempotent.
    pub fn unmount(&self) {
        if self.inner.state.borrow().is_mounted() {
            tracing::debug!("Unmounting weekly visits panel");
        }
        self.inner.state.borrow_mut().unmount();
        self.subscription.borrow_mut().unsubscribe();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.state.borrow().is_mounted()
    }

    /// Current theme and series
    pub fn snapshot(&self) -> PanelSnapshot {
        self.inner.state.borrow().snapshot()
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.unmount();
    }
}
