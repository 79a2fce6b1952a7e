//! Empty state for a filter combination with no matches. A normal terminal
//! state, not an error.

use dioxus::prelude::*;

#[component]
pub fn NoResults(on_reset: EventHandler<()>) -> Element {
    rsx! {
        div { class: "no-results-container",
            h3 { "No Matches Found" }
            p { "Try adjusting your filters or reset them to see all projects." }
            button {
                class: "reset-filters-btn",
                onclick: move |_| on_reset.call(()),
                "Reset Filters"
            }
        }
    }
}
