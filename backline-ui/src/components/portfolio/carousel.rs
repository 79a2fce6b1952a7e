//! Carousel section markup.
//!
//! Renders the widget's expected structure (`.swiper` root, `.swiper-wrapper`
//! slide list, external nav buttons); the widget instance itself is
//! constructed over this markup by the page wiring and torn down before
//! every rebuild.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::portfolio::slide::PortfolioSlide;
use backline_common::{EmbedOptions, ProjectEntry};
use dioxus::prelude::*;

#[component]
pub fn PortfolioCarousel(entries: Vec<ProjectEntry>, options: EmbedOptions) -> Element {
    rsx! {
        div { class: "portfolio-slider-wrapper",
            div { class: "portfolio-swiper swiper",
                div { class: "swiper-wrapper", id: "portfolio-slider",
                    for entry in entries {
                        PortfolioSlide {
                            key: "{entry.embed_url}",
                            entry,
                            options: options.clone(),
                        }
                    }
                }
            }
            SliderButton {
                class: "portfolio-prev",
                label: "Previous project",
                ChevronLeftIcon { class: "w-6 h-6" }
            }
            SliderButton {
                class: "portfolio-next",
                label: "Next project",
                ChevronRightIcon { class: "w-6 h-6" }
            }
        }
    }
}

/// Nav arrow with touch feedback. The widget binds these by class selector;
/// no click handler here.
#[component]
fn SliderButton(class: &'static str, label: &'static str, children: Element) -> Element {
    let mut pressed = use_signal(|| false);

    rsx! {
        button {
            class: if pressed() { "slider-btn {class} btn-active-touch" } else { "slider-btn {class}" },
            aria_label: "{label}",
            ontouchstart: move |_| pressed.set(true),
            ontouchend: move |_| pressed.set(false),
            ontouchcancel: move |_| pressed.set(false),
            {children}
        }
    }
}
