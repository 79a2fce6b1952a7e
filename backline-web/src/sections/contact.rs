//! Contact section. On narrow viewports the phone link opens an app chooser
//! modal instead of dialing straight away.

use backline_ui::{Modal, PhoneIcon};
use dioxus::prelude::*;

const PHONE: &str = "+31 20 555 0199";
const PHONE_HREF: &str = "tel:+31205550199";

#[component]
pub fn ContactSection() -> Element {
    let mut apps_open = use_signal(|| false);
    let apps_open_read: ReadSignal<bool> = apps_open.into();

    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "section-heading",
                h2 { "Contact" }
                p { "Tell us about the record you want to make." }
            }
            div { class: "contact-actions",
                a {
                    class: "contact-link",
                    href: "mailto:hello@backlinestudio.example",
                    "hello@backlinestudio.example"
                }
                a {
                    class: "contact-link",
                    href: PHONE_HREF,
                    onclick: move |evt| {
                        #[cfg(target_arch = "wasm32")]
                        {
                            let narrow = web_sys::window()
                                .and_then(|window| window.inner_width().ok())
                                .and_then(|width| width.as_f64())
                                .is_some_and(|width| width <= 768.0);
                            if narrow {
                                evt.prevent_default();
                                apps_open.set(true);
                            }
                        }
                    },
                    PhoneIcon {}
                    span { "{PHONE}" }
                }
            }
            Modal {
                is_open: apps_open_read,
                on_close: move |_| apps_open.set(false),
                class: "contact-apps-modal",
                div { class: "contact-apps",
                    h3 { "Reach us on" }
                    a {
                        href: "https://wa.me/31205550199",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "WhatsApp"
                    }
                    a { href: "sms:+31205550199", "Message" }
                    a { href: PHONE_HREF, "Call" }
                    button {
                        class: "contact-apps-close",
                        onclick: move |_| apps_open.set(false),
                        "Close"
                    }
                }
            }
        }
    }
}
