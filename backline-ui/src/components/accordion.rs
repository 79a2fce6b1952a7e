//! Accordion with one item open at a time.
//!
//! Opening an item closes the rest and, once the expand transition has had a
//! beat, scrolls the item to the center of the viewport.

use crate::components::icons::ChevronDownIcon;
use dioxus::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

/// One expandable row.
#[derive(Clone, Debug, PartialEq)]
pub struct AccordionItem {
    pub title: String,
    pub description: String,
    /// `(heading, body)` detail blocks shown when expanded.
    pub details: Vec<(String, String)>,
}

#[component]
pub fn Accordion(items: Vec<AccordionItem>) -> Element {
    let mut open_index = use_signal(|| None::<usize>);
    let mut item_elements: Signal<HashMap<usize, Rc<MountedData>>> = use_signal(HashMap::new);

    rsx! {
        div { class: "accordion",
            for (index, item) in items.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: if open_index() == Some(index) { "accordion-item active" } else { "accordion-item" },
                    onmounted: move |evt| {
                        item_elements.write().insert(index, evt.data());
                    },
                    div {
                        class: "accordion-header",
                        onclick: move |_| {
                            let was_open = open_index() == Some(index);
                            open_index.set(if was_open { None } else { Some(index) });

                            #[cfg(target_arch = "wasm32")]
                            if !was_open {
                                let data = item_elements.read().get(&index).cloned();
                                if let Some(data) = data {
                                    spawn(async move {
                                        gloo_timers::future::TimeoutFuture::new(500).await;
                                        if let Some(element) = data.downcast::<web_sys::Element>() {
                                            crate::wasm_utils::scroll_into_center(element);
                                        }
                                    });
                                }
                            }
                        },
                        div { class: "accordion-text",
                            h3 { class: "accordion-title", "{item.title}" }
                            p { class: "accordion-description", "{item.description}" }
                        }
                        button {
                            class: "accordion-toggle",
                            aria_expanded: if open_index() == Some(index) { "true" } else { "false" },
                            ChevronDownIcon {}
                        }
                    }
                    div { class: "accordion-content",
                        div { class: "service-detail-list",
                            for (detail_index, (heading, body)) in item.details.iter().enumerate() {
                                div {
                                    key: "{detail_index}",
                                    class: "service-detail-item",
                                    h4 { "{heading}" }
                                    p { "{body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
