//! Mobile filter surface: trigger button, slide-in panel and active pills.
//!
//! The panel reuses the same button groups as the desktop bar but defers
//! application to an explicit Apply action. Pills and the count badge are
//! pure projections of the mobile selection - no state of their own.

use crate::components::icons::{FilterIcon, XIcon};
use crate::components::portfolio::filter_bar::{FilterButtonGroup, FilterOptionSet};
use backline_common::{FilterGroup, FilterSelection};
use dioxus::prelude::*;

/// Opens the mobile panel; the badge counts active specific filters.
#[component]
pub fn FilterTrigger(count: usize, on_open: EventHandler<()>) -> Element {
    let label = if count > 0 {
        format!("Filter Projects ({count})")
    } else {
        "Filter Projects".to_string()
    };

    rsx! {
        button {
            class: "mobile-filter-trigger",
            onclick: move |_| on_open.call(()),
            FilterIcon {}
            span { "{label}" }
        }
    }
}

#[component]
pub fn FilterPanel(
    options: FilterOptionSet,
    selection: FilterSelection,
    is_open: bool,
    on_toggle: EventHandler<(FilterGroup, String)>,
    on_select_all: EventHandler<FilterGroup>,
    on_apply: EventHandler<()>,
    on_clear: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: if is_open { "filter-panel-overlay is-open" } else { "filter-panel-overlay" },
            onclick: move |_| on_close.call(()),
            div {
                class: "filter-panel",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "filter-panel-header",
                    h3 { "Filter Projects" }
                    button {
                        class: "filter-panel-close-btn",
                        aria_label: "Close filters",
                        onclick: move |_| on_close.call(()),
                        XIcon {}
                    }
                }
                div { class: "filter-panel-body",
                    FilterButtonGroup {
                        group: FilterGroup::App,
                        heading: "Services",
                        options: options.app.clone(),
                        selection: selection.app.clone(),
                        on_toggle,
                        on_select_all,
                    }
                    FilterButtonGroup {
                        group: FilterGroup::Style,
                        heading: "Styles",
                        options: options.style.clone(),
                        selection: selection.style.clone(),
                        on_toggle,
                        on_select_all,
                    }
                }
                div { class: "filter-panel-footer",
                    button {
                        class: "clear-filters-btn",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                    button {
                        class: "apply-filters-btn",
                        onclick: move |_| on_apply.call(()),
                        "Apply Filters"
                    }
                }
            }
        }
    }
}

/// Pill list mirroring the mobile selection, with per-pill removal and a
/// clear-all action. Hidden entirely while no specific filter is active.
#[component]
pub fn ActiveFilterPills(
    selection: FilterSelection,
    options: FilterOptionSet,
    on_remove: EventHandler<(FilterGroup, String)>,
    on_clear_all: EventHandler<()>,
) -> Element {
    let pills = selection.active_values();

    rsx! {
        if !pills.is_empty() {
            div { class: "active-filters-container",
                div { class: "active-filters-pills",
                    for (group, value) in pills {
                        div { key: "{value}", class: "filter-pill",
                            span { "{options.label_for(group, &value)}" }
                            button {
                                class: "remove-pill-btn",
                                aria_label: "Remove filter",
                                onclick: {
                                    let value = value.clone();
                                    move |_| on_remove.call((group, value.clone()))
                                },
                                XIcon { class: "w-3 h-3" }
                            }
                        }
                    }
                }
                button {
                    class: "clear-all-pills-btn",
                    onclick: move |_| on_clear_all.call(()),
                    "Clear All"
                }
            }
        }
    }
}
