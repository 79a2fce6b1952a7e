//! Browser interop utilities
//!
//! Event listeners and visibility observers wrapped so their JS closures are
//! owned by a Rust value: attach on construction, detach on drop. This keeps
//! listener lifetime tied to ownership instead of `Closure::forget()`, which
//! leaks and leaves listeners attached forever.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// An element event listener that removes itself when dropped.
///
/// `new_once` registers with `{ once: true }`, for triggers that must fire
/// at most one time (the carousel's first-interaction load).
pub struct ElementEventListener {
    element: web_sys::Element,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl ElementEventListener {
    pub fn new_once(
        element: web_sys::Element,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        element
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            element,
            event_name,
            callback,
        }
    }
}

impl Drop for ElementEventListener {
    fn drop(&mut self) {
        let _ = self.element.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Visibility observer that fires exactly once, the first time its target
/// intersects the viewport, then disconnects itself.
///
/// `root_margin` pre-rolls the intersection (e.g. `"0px 0px 100px 0px"`
/// fires 100px before the section scrolls in).
pub struct OneShotObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn new(
        target: &web_sys::Element,
        root_margin: &str,
        on_visible: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut pending = Some(on_visible);
        let callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)> =
            Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_ref::<web_sys::IntersectionObserverEntry>()
                            .is_some_and(|entry| entry.is_intersecting())
                    });
                    if intersecting {
                        observer.disconnect();
                        if let Some(callback) = pending.take() {
                            callback();
                        }
                    }
                },
            ));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Visibility observer that reports every enter/leave transition (the hero
/// video's play-while-visible behavior). Disconnects on drop.
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityObserver {
    pub fn with_threshold(
        target: &web_sys::Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback: Closure<dyn FnMut(js_sys::Array)> =
            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    if let Some(entry) = entry.dyn_ref::<web_sys::IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            }));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth-scroll an element to the vertical center of the viewport.
pub fn scroll_into_center(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
