//! Modal component using the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape handling
//! and `::backdrop` styling for free. The dialog element handles its own
//! visibility; an inner fixed container does layout and backdrop clicks.
//! `showModal()` throws if the dialog is already open, so the effect checks
//! the `open` attribute before calling either direction.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal that opens from a `is_open` signal and reports close requests
/// (Escape key, backdrop click) through `on_close`.
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();
    let dialog_id_for_rsx = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_id_for_effect) else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");

        if is_open {
            if is_dialog_open {
                return;
            }
            if let Ok(show_modal) = js_sys::Reflect::get(&element, &"showModal".into()) {
                if let Some(func) = show_modal.dyn_ref::<js_sys::Function>() {
                    let _ = func.call0(&element);
                }
            }
        } else {
            if !is_dialog_open {
                return;
            }
            if let Ok(close) = js_sys::Reflect::get(&element, &"close".into()) {
                if let Some(func) = close.dyn_ref::<js_sys::Function>() {
                    let _ = func.call0(&element);
                }
            }
        }
    });

    let dialog_class = class.unwrap_or_default();

    // The dialog element must not get display classes; they would override
    // the native display:none while closed.
    rsx! {
        dialog {
            id: "{dialog_id_for_rsx}",
            class: "modal-dialog {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "modal-backdrop-layer",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
