//! One carousel slide.
//!
//! Whether a slide carries a live player or a placeholder is decided by the
//! catalog's load flag alone - the DOM is a write-only projection of it.
//! Placeholders keep the player src and title in data attributes so the
//! deferred load has everything it needs.

use crate::components::icons::platform_icon;
use backline_common::{player_src, EmbedOptions, ProjectEntry};
use dioxus::prelude::*;

#[component]
pub fn PortfolioSlide(entry: ProjectEntry, options: EmbedOptions) -> Element {
    let src = player_src(&entry.embed_url, &options);
    let slide_class = if entry.is_loaded() {
        "swiper-slide portfolio-item is-loaded"
    } else {
        "swiper-slide portfolio-item"
    };

    rsx! {
        div {
            class: "{slide_class}",
            "data-tags": "{entry.tags}",
            "data-embed-url": "{entry.embed_url}",
            div { class: "player-shell",
                if entry.is_loaded() {
                    div { class: "player-viewport",
                        iframe {
                            title: "Audio player for {entry.title}",
                            width: "480",
                            height: "166",
                            "scrolling": "no",
                            "frameborder": "no",
                            allow: "autoplay",
                            src: "{src}",
                        }
                    }
                } else {
                    div {
                        class: "player-placeholder",
                        "data-src": "{src}",
                        "data-title": "{entry.title}",
                    }
                }
            }
            div { class: "portfolio-info",
                h3 { class: "portfolio-title", "{entry.title}" }
                p { class: "portfolio-desc", "{entry.description}" }
                div { class: "portfolio-tags",
                    for tag in entry.tags() {
                        span { class: "tag", "{display_tag(tag)}" }
                    }
                }
                if !entry.links.is_empty() {
                    div { class: "artist-links",
                        for (platform, url) in entry.links.iter() {
                            a {
                                key: "{platform.label()}",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                title: platform.label(),
                                aria_label: platform.label(),
                                {platform_icon(platform, "w-5 h-5")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Tag token to display text; authors use dashes where the label has spaces.
pub fn display_tag(tag: &str) -> String {
    tag.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tag_replaces_dashes() {
        assert_eq!(display_tag("post-production"), "post production");
        assert_eq!(display_tag("mixing"), "mixing");
    }
}
