//! Theme Detection
//!
//! The page's dark-mode preference is a class on the root element that some
//! external theme controller toggles. This module models it as a capability:
//! anything that can [`read`](ThemeWatcher::read) the marker and
//! [`subscribe`](ThemeWatcher::subscribe) to its changes can drive a panel.
//!
//! Implementations:
//! - [`PollingThemeWatcher`]: polls a class attribute source (native)
//! - `DomThemeWatcher` in the frontend crate: `MutationObserver` on `<html>`

pub mod palette;
#[cfg(feature = "native")]
pub mod poll;

pub use palette::Palette;
#[cfg(feature = "native")]
pub use poll::PollingThemeWatcher;

/// Class name the external theme controller puts on the root element
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";

/// Callback invoked with the current dark-mode state
pub type ThemeCallback = Box<dyn FnMut(bool)>;

/// Source of the ambient dark-mode marker
pub trait ThemeWatcher {
    /// Whether dark mode is active right now. Absent marker means light.
    fn read(&self) -> bool;

    /// Register for marker changes
    ///
    /// The callback runs once immediately with the current value, then once
    /// per change with the new value. Consecutive values always differ.
    fn subscribe(&self, callback: ThemeCallback) -> Subscription;
}

/// Handle to an active theme subscription
///
/// Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the release action for an observation resource
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Stop notifications and release the observer. Safe to call repeatedly.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Check a `class` attribute value for the marker class
///
/// Matches whole whitespace-separated tokens only, so `dark-mode-preview`
/// does not count as `dark-mode`.
pub fn marker_present(class_attribute: Option<&str>, marker: &str) -> bool {
    class_attribute
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == marker))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_marker_present() {
        assert!(marker_present(Some("dark-mode"), "dark-mode"));
        assert!(marker_present(Some("  js   dark-mode\tfoo "), "dark-mode"));
        assert!(!marker_present(Some("dark-mode-preview"), "dark-mode"));
        assert!(!marker_present(Some(""), "dark-mode"));
        assert!(!marker_present(None, "dark-mode"));
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut sub = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        drop(sub);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        {
            let _sub = Subscription::new(move || flag.set(true));
        }
        assert!(released.get());
        assert!(!Subscription::detached().is_active());
    }
}
