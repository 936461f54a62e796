//! Polling theme watcher
//!
//! Re-reads a class attribute source on a fixed interval and reports marker
//! changes. Used where no mutation events are available, e.g. the CLI
//! watching a file that an external controller rewrites.

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use super::{marker_present, Subscription, ThemeCallback, ThemeWatcher, DEFAULT_MARKER_CLASS};

/// Default polling period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Shortest accepted polling period
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Yields the root element's current `class` attribute, if any
pub type ClassSource = Rc<dyn Fn() -> Option<String>>;

/// Theme watcher that polls its marker source
///
/// Subscribing spawns a task with [`tokio::task::spawn_local`], so it must
/// be called from inside a [`tokio::task::LocalSet`].
#[derive(Clone)]
pub struct PollingThemeWatcher {
    source: ClassSource,
    marker: String,
    interval: Duration,
}

impl PollingThemeWatcher {
    /// Create a watcher over an arbitrary class attribute source
    pub fn new(source: impl Fn() -> Option<String> + 'static) -> Self {
        Self {
            source: Rc::new(source),
            marker: DEFAULT_MARKER_CLASS.to_string(),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Watch a file whose contents are the root element's class attribute
    ///
    /// A missing or unreadable file reads as "no classes".
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(move || std::fs::read_to_string(&path).ok())
    }

    /// Builder method: marker class to look for
    pub fn marker_class(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Builder method: polling period, at least [`MIN_POLL_INTERVAL`]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_POLL_INTERVAL);
        self
    }
}

impl ThemeWatcher for PollingThemeWatcher {
    fn read(&self) -> bool {
        marker_present((self.source)().as_deref(), &self.marker)
    }

    fn subscribe(&self, mut callback: ThemeCallback) -> Subscription {
        let mut last = self.read();
        callback(last);

        let source = Rc::clone(&self.source);
        let marker = self.marker.clone();
        let period = self.interval;

        let handle = tokio::task::spawn_local(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately; the initial value was already sent
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let dark = marker_present(source().as_deref(), &marker);
                if dark != last {
                    tracing::debug!(dark, "Theme marker changed");
                    last = dark;
                    callback(dark);
                }
            }
        });

        Subscription::new(move || handle.abort())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    fn shared_classes() -> (Rc<RefCell<Option<String>>>, PollingThemeWatcher) {
        let classes = Rc::new(RefCell::new(None::<String>));
        let source = Rc::clone(&classes);
        let watcher = PollingThemeWatcher::new(move || source.borrow().clone())
            .interval(Duration::from_millis(100));
        (classes, watcher)
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, ThemeCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Box::new(move |dark| sink.borrow_mut().push(dark)))
    }

    #[test]
    fn test_read_defaults_to_light() {
        let (classes, watcher) = shared_classes();
        assert!(!watcher.read());

        *classes.borrow_mut() = Some("container dark-mode".to_string());
        assert!(watcher.read());
    }

    #[test]
    fn test_custom_marker_class() {
        let watcher = PollingThemeWatcher::new(|| Some("theme-night".to_string()))
            .marker_class("theme-night");
        assert!(watcher.read());
    }

    #[test]
    fn test_read_missing_file() {
        let watcher = PollingThemeWatcher::from_file("/nonexistent/weekly-visits/marker");
        assert!(!watcher.read());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_sequence() {
        LocalSet::new()
            .run_until(async {
                let (classes, watcher) = shared_classes();
                let (seen, callback) = recorder();

                let _sub = watcher.subscribe(callback);
                assert_eq!(*seen.borrow(), vec![false]);

                *classes.borrow_mut() = Some("dark-mode".to_string());
                sleep(Duration::from_millis(150)).await;

                // Unrelated class churn is not a marker change
                *classes.borrow_mut() = Some("dark-mode compact".to_string());
                sleep(Duration::from_millis(150)).await;

                *classes.borrow_mut() = None;
                sleep(Duration::from_millis(150)).await;

                assert_eq!(*seen.borrow(), vec![false, true, false]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_notification_without_changes() {
        LocalSet::new()
            .run_until(async {
                let (classes, watcher) = shared_classes();
                *classes.borrow_mut() = Some("dark-mode".to_string());
                let (seen, callback) = recorder();

                let _sub = watcher.subscribe(callback);
                sleep(Duration::from_secs(2)).await;

                assert_eq!(*seen.borrow(), vec![true]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsubscribe_stops_notifications() {
        LocalSet::new()
            .run_until(async {
                let (classes, watcher) = shared_classes();
                let (seen, callback) = recorder();

                let mut sub = watcher.subscribe(callback);
                sub.unsubscribe();
                sub.unsubscribe();

                *classes.borrow_mut() = Some("dark-mode".to_string());
                sleep(Duration::from_secs(1)).await;

                assert_eq!(*seen.borrow(), vec![false]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_still_polls() {
        LocalSet::new()
            .run_until(async {
                let (classes, watcher) = shared_classes();
                let watcher = watcher.interval(Duration::ZERO);
                let (seen, callback) = recorder();

                let _sub = watcher.subscribe(callback);
                *classes.borrow_mut() = Some("dark-mode".to_string());
                sleep(Duration::from_secs(1)).await;

                assert_eq!(*seen.borrow(), vec![false, true]);
            })
            .await;
    }
}
