//! Site header with anchor navigation and the mobile drawer.

use backline_ui::{MenuIcon, XIcon};
use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Services", "#services"),
    ("Work", "#portfolio"),
    ("Gear", "#gear"),
    ("Contact", "#contact"),
];

#[component]
pub fn SiteNav() -> Element {
    let mut drawer_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "#hero", "Backline Studio" }
            nav { class: "desktop-nav",
                for (label, href) in NAV_LINKS {
                    a { key: "{href}", href: "{href}", "{label}" }
                }
            }
            button {
                class: "mobile-nav-toggle",
                aria_label: "Toggle navigation",
                onclick: move |_| drawer_open.toggle(),
                if drawer_open() {
                    XIcon { class: "w-5 h-5" }
                } else {
                    MenuIcon { class: "w-5 h-5" }
                }
            }
        }
        nav { class: if drawer_open() { "mobile-nav is-open" } else { "mobile-nav" },
            for (label, href) in NAV_LINKS {
                a {
                    key: "{href}",
                    href: "{href}",
                    onclick: move |_| drawer_open.set(false),
                    "{label}"
                }
            }
        }
    }
}
