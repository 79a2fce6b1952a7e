//! Services accordion, viewed through one of four client profiles.
//!
//! Switching profile swaps the accordion content and the section's accent
//! color custom property.

use crate::data::{self, ClientType};
use backline_ui::Accordion;
use dioxus::prelude::*;

#[component]
pub fn ServicesSection() -> Element {
    let mut client_type = use_signal(|| ClientType::Artist);

    // Mirror the active profile's accent color onto the document root.
    use_effect(move || {
        let _color = client_type().theme_color();
        #[cfg(target_arch = "wasm32")]
        {
            let root = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element());
            if let Some(root) = root {
                use wasm_bindgen::JsCast;
                if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = root
                        .style()
                        .set_property("--current-service-color", _color);
                }
            }
        }
    });

    rsx! {
        section { id: "services", class: "services-section",
            div { class: "section-heading",
                h2 { "Services" }
                p { "What we do depends on who you are." }
            }
            div { class: "service-selector",
                for profile in ClientType::ALL {
                    button {
                        key: "{profile.label()}",
                        class: if client_type() == profile { "service-selector-btn active" } else { "service-selector-btn" },
                        onclick: move |_| client_type.set(profile),
                        "{profile.label()}"
                    }
                }
            }
            Accordion { items: data::services_for(client_type()) }
        }
    }
}
