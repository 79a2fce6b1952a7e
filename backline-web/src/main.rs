//! backline-web - the studio site
//!
//! Single-page marketing/portfolio site for Backline Studio. All real state
//! lives in the portfolio section; everything else is presentation.

mod data;
mod sections;

use dioxus::prelude::*;
use sections::{
    ContactSection, GearSection, HeroSection, PortfolioSection, ServicesSection, SiteNav,
};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The carousel widget's stylesheet; its script is injected on demand by the
/// portfolio section.
const CAROUSEL_CSS_CDN: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        SiteNav {}
        main {
            HeroSection {}
            ServicesSection {}
            PortfolioSection {}
            GearSection {}
            ContactSection {}
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS_CDN }
        Router::<Route> {}
    }
}

fn main() {
    dioxus::launch(App);
}
