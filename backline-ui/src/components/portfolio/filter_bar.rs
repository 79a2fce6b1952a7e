//! Desktop filter surface: two button groups plus a clear action.

use backline_common::{FilterGroup, FilterSelection, GroupSelection};
use dioxus::prelude::*;

/// One filter button. `value` is the token stored in the selection; a style
/// value may bundle several comma-separated tags behind one button.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The button definitions shared by both filter surfaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptionSet {
    pub app: Vec<FilterOption>,
    pub style: Vec<FilterOption>,
}

impl FilterOptionSet {
    /// Display label for an active value (pills), falling back to the raw
    /// token for values no button defines anymore.
    pub fn label_for(&self, group: FilterGroup, value: &str) -> String {
        let options = match group {
            FilterGroup::App => &self.app,
            FilterGroup::Style => &self.style,
        };
        options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| value.to_string())
    }
}

#[component]
pub fn FilterBar(
    options: FilterOptionSet,
    selection: FilterSelection,
    on_toggle: EventHandler<(FilterGroup, String)>,
    on_select_all: EventHandler<FilterGroup>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "portfolio-filters",
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
            div {
                class: if selection.is_all() { "desktop-clear-filters is-hidden" } else { "desktop-clear-filters" },
                button {
                    class: "clear-filters-btn",
                    onclick: move |_| on_clear.call(()),
                    "Clear Filters"
                }
            }
        }
    }
}

/// One group of filter buttons with its `All` sentinel in front.
#[component]
pub fn FilterButtonGroup(
    group: FilterGroup,
    heading: &'static str,
    options: Vec<FilterOption>,
    selection: GroupSelection,
    on_toggle: EventHandler<(FilterGroup, String)>,
    on_select_all: EventHandler<FilterGroup>,
) -> Element {
    rsx! {
        div { class: "filter-group",
            span { class: "filter-group-label", "{heading}" }
            button {
                class: if selection.is_all() { "filter-btn active" } else { "filter-btn" },
                onclick: move |_| on_select_all.call(group),
                "All"
            }
            for option in options {
                button {
                    key: "{option.value}",
                    class: if selection.is_active(&option.value) { "filter-btn active" } else { "filter-btn" },
                    onclick: {
                        let value = option.value.clone();
                        move |_| on_toggle.call((group, value.clone()))
                    },
                    "{option.label}"
                }
            }
        }
    }
}
