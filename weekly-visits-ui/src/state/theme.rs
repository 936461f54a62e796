//! DOM Theme Watcher
//!
//! Watches the `class` attribute of `<html>` for the dark-mode marker that
//! the page's theme controller toggles.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MutationObserver, MutationObserverInit};

use weekly_visits::{Subscription, ThemeWatcher, DEFAULT_MARKER_CLASS};

/// [`ThemeWatcher`] backed by a `MutationObserver` on the document element
pub struct DomThemeWatcher {
    marker: String,
}

impl DomThemeWatcher {
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}

impl Default for DomThemeWatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn document_element() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

fn root_has_class(marker: &str) -> bool {
    document_element()
        .map(|root| root.class_list().contains(marker))
        .unwrap_or(false)
}

impl ThemeWatcher for DomThemeWatcher {
    fn read(&self) -> bool {
        root_has_class(&self.marker)
    }

    fn subscribe(&self, mut callback: Box<dyn FnMut(bool)>) -> Subscription {
        let mut last = self.read();
        callback(last);

        let Some(root) = document_element() else {
            return Subscription::detached();
        };

        let marker = self.marker.clone();
        let on_mutation = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
            let dark = root_has_class(&marker);
            if dark != last {
                last = dark;
                callback(dark);
            }
        }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = match MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to create theme observer: {:?}", e).into());
                return Subscription::detached();
            }
        };

        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));

        if let Err(e) = observer.observe_with_options(&root, &init) {
            web_sys::console::error_1(&format!("Failed to observe theme marker: {:?}", e).into());
            return Subscription::detached();
        }

        Subscription::new(move || {
            observer.disconnect();
            drop(on_mutation);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_root_classes(classes: &str) {
        document_element().unwrap().set_class_name(classes);
    }

    /// Let pending mutation records be delivered
    async fn flush() {
        TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn test_marker_toggle_sequence() {
        set_root_classes("");
        let watcher = DomThemeWatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut subscription = watcher.subscribe(Box::new(move |dark| sink.borrow_mut().push(dark)));
        assert_eq!(*seen.borrow(), vec![false]);

        set_root_classes("dark-mode");
        flush().await;
        set_root_classes("dark-mode compact");
        flush().await;
        set_root_classes("compact");
        flush().await;
        assert_eq!(*seen.borrow(), vec![false, true, false]);

        subscription.unsubscribe();
        set_root_classes("dark-mode");
        flush().await;
        assert_eq!(seen.borrow().len(), 3);

        set_root_classes("");
    }

    #[wasm_bindgen_test]
    fn test_read_without_marker() {
        set_root_classes("something-else");
        assert!(!DomThemeWatcher::new().read());
        set_root_classes("dark-mode");
        assert!(DomThemeWatcher::new().read());
        set_root_classes("");
    }
}
