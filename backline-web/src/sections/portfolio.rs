//! Portfolio section wiring.
//!
//! Owns the engine state - the page-lifetime catalog, one filter selection
//! per surface, the load scheduler's latches - and connects it to the
//! browser: two one-shot visibility observers (widget fetch, smart load),
//! the carousel widget session, and the shared player scale factor.
//!
//! The widget session is fully torn down and rebuilt whenever the rendered
//! subset changes; load state never lives in the DOM, only in the catalog.

use backline_common::{
    visible_entries, Catalog, FilterSelection, LoadScheduler, PriorityLoad, ProjectEntry,
};
use backline_ui::{
    ActiveFilterPills, FilterBar, FilterPanel, FilterTrigger, NoResults, PortfolioCarousel,
};
use dioxus::prelude::*;
use tracing::info;

#[cfg(target_arch = "wasm32")]
use backline_ui::{
    script_loader::inject_script,
    swiper::{Swiper, SwiperOptions},
    wasm_utils::{ElementEventListener, OneShotObserver},
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::data;

const WIDGET_SCRIPT_CDN: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js";

/// Pre-roll margins for the two visibility observers: the widget script is
/// fetched earlier than the smart load fires.
const WIDGET_FETCH_MARGIN: &str = "200px";
const SMART_LOAD_MARGIN: &str = "0px 0px 100px 0px";

/// Which surface a filter action came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Surface {
    Desktop,
    Mobile,
}

/// A live carousel widget instance plus the listeners tied to it. Dropped
/// wholesale on every rebuild.
#[cfg(target_arch = "wasm32")]
struct CarouselSession {
    swiper: Swiper,
    _pointer_listener: Option<ElementEventListener>,
}

#[component]
pub fn PortfolioSection() -> Element {
    let catalog = use_signal(data::load_catalog);
    let mut desktop_selection = use_signal(FilterSelection::default);
    let mut mobile_selection = use_signal(FilterSelection::default);
    let mut scheduler = use_signal(LoadScheduler::new);
    let mut panel_open = use_signal(|| false);
    let mut widget_ready = use_signal(|| false);
    // Selection the current render session was built from, and the surface
    // that applied it (the reset action goes back through that surface).
    let mut applied = use_signal(FilterSelection::default);
    let mut acting = use_signal(|| Surface::Desktop);

    #[cfg(target_arch = "wasm32")]
    let swiper_session: Signal<Option<CarouselSession>> = use_signal(|| None);
    #[cfg(target_arch = "wasm32")]
    let mut observers: Signal<Vec<OneShotObserver>> = use_signal(Vec::new);

    let filter_options = use_hook(data::filter_options);
    let embed_options = use_hook(data::embed_options);

    // Embed-url keys of the current render session. Memoized so that loaded
    // flag flips (which re-render slides in place) do not count as a subset
    // change and needlessly rebuild the widget.
    let visible_keys = use_memo(move || {
        visible_entries(&catalog.read(), &applied.read())
            .iter()
            .map(|entry| entry.embed_url.clone())
            .collect::<Vec<_>>()
    });

    // First-interaction trigger: warm the active slide now and every other
    // rendered slide on the next frame. Latched inside the scheduler.
    let mut trigger_priority = move || {
        #[cfg(target_arch = "wasm32")]
        let active = swiper_session
            .read()
            .as_ref()
            .and_then(|session| session.swiper.active_slide_attr("data-embed-url"));
        #[cfg(not(target_arch = "wasm32"))]
        let active: Option<String> = None;

        let rendered = visible_keys.read().clone();
        let plan = {
            let catalog_ref = catalog.read();
            scheduler
                .write()
                .priority_load(&catalog_ref, active.as_deref(), &rendered)
        };
        if let Some(plan) = plan {
            info!(
                "first carousel interaction, loading {} remaining players",
                plan.deferred.len() + usize::from(plan.now.is_some())
            );
            run_priority_plan(catalog, plan);
        }
    };

    // Shared apply contract for both surfaces. Warms the slides that are
    // about to be torn down, then swaps the render session's selection.
    let mut apply = move |surface: Surface| {
        trigger_priority();
        let selection = match surface {
            Surface::Desktop => desktop_selection(),
            Surface::Mobile => mobile_selection(),
        };
        acting.set(surface);
        applied.set(selection);
    };

    // Rebuild the widget session whenever the rendered subset or the widget
    // script's readiness changes. Effects run after the slide DOM is
    // committed, so the widget always sees the fresh markup.
    use_effect(move || {
        let keys = visible_keys();
        let ready = widget_ready();

        #[cfg(target_arch = "wasm32")]
        {
            let mut swiper_session = swiper_session;
            if let Some(session) = swiper_session.write().take() {
                session.swiper.destroy();
            }
            if !ready || keys.is_empty() {
                return;
            }
            match build_session(keys.len(), trigger_priority) {
                Ok(session) => *swiper_session.write() = Some(session),
                Err(err) => tracing::warn!("carousel widget init failed: {err:?}"),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (keys, ready);
    });

    let entries: Vec<ProjectEntry> = visible_entries(&catalog.read(), &applied.read())
        .into_iter()
        .cloned()
        .collect();
    let catalog_empty = catalog.read().is_empty();

    rsx! {
        section {
            id: "portfolio",
            class: "portfolio-section",
            onmounted: move |_evt| {
                #[cfg(target_arch = "wasm32")]
                if let Some(element) = _evt.data().downcast::<web_sys::Element>() {
                    // Observer 1: fetch the widget module ahead of arrival.
                    let widget_observer = OneShotObserver::new(element, WIDGET_FETCH_MARGIN, move || {
                        if Swiper::is_available() {
                            widget_ready.set(true);
                            return;
                        }
                        info!("portfolio section approaching, fetching carousel widget");
                        let injected = inject_script(
                            WIDGET_SCRIPT_CDN,
                            move || widget_ready.set(true),
                            || tracing::warn!("carousel widget failed to load, keeping static markup"),
                        );
                        if let Err(err) = injected {
                            tracing::warn!("could not inject carousel widget script: {err:?}");
                        }
                    });

                    // Observer 2: smart initial load against the original
                    // catalog order, sized by viewport width.
                    let smart_observer = OneShotObserver::new(element, SMART_LOAD_MARGIN, move || {
                        let width = web_sys::window()
                            .and_then(|window| window.inner_width().ok())
                            .and_then(|width| width.as_f64())
                            .unwrap_or(0.0);
                        let plan = {
                            let catalog_ref = catalog.read();
                            scheduler.write().smart_load(&catalog_ref, width)
                        };
                        if !plan.is_empty() {
                            info!("portfolio in view, smart loading {} players", plan.len());
                        }
                        let mut catalog = catalog;
                        let mut catalog_ref = catalog.write();
                        for url in &plan {
                            catalog_ref.mark_loaded(url);
                        }
                        drop(catalog_ref);
                        apply_player_scale();
                    });

                    let mut observer_store = observers.write();
                    match widget_observer {
                        Ok(observer) => observer_store.push(observer),
                        Err(err) => tracing::warn!("widget fetch observer unavailable: {err:?}"),
                    }
                    match smart_observer {
                        Ok(observer) => observer_store.push(observer),
                        Err(err) => tracing::warn!("smart load observer unavailable: {err:?}"),
                    }
                }
            },
            div { class: "section-heading",
                h2 { "Selected Work" }
                p { "A cross-section of records that came through the studio." }
            }

            FilterBar {
                options: filter_options.clone(),
                selection: desktop_selection(),
                on_toggle: move |(group, value): (_, String)| {
                    desktop_selection.write().group_mut(group).toggle(&value);
                    apply(Surface::Desktop);
                },
                on_select_all: move |group| {
                    desktop_selection.write().group_mut(group).select_all();
                    apply(Surface::Desktop);
                },
                on_clear: move |_| {
                    desktop_selection.write().clear();
                    apply(Surface::Desktop);
                },
            }

            FilterTrigger {
                count: mobile_selection.read().active_count(),
                on_open: move |_| {
                    trigger_priority();
                    panel_open.set(true);
                },
            }

            ActiveFilterPills {
                selection: mobile_selection(),
                options: filter_options.clone(),
                on_remove: move |(group, value): (_, String)| {
                    mobile_selection.write().group_mut(group).toggle(&value);
                    apply(Surface::Mobile);
                },
                on_clear_all: move |_| {
                    mobile_selection.write().clear();
                    apply(Surface::Mobile);
                },
            }

            if entries.is_empty() && !catalog_empty {
                NoResults {
                    on_reset: move |_| {
                        match acting() {
                            Surface::Desktop => desktop_selection.write().clear(),
                            Surface::Mobile => mobile_selection.write().clear(),
                        }
                        apply(acting());
                    },
                }
            } else {
                PortfolioCarousel { entries, options: embed_options.clone() }
            }

            FilterPanel {
                options: filter_options.clone(),
                selection: mobile_selection(),
                is_open: panel_open(),
                on_toggle: move |(group, value): (_, String)| {
                    mobile_selection.write().group_mut(group).toggle(&value);
                },
                on_select_all: move |group| {
                    mobile_selection.write().group_mut(group).select_all();
                },
                on_apply: move |_| {
                    apply(Surface::Mobile);
                    panel_open.set(false);
                },
                on_clear: move |_| {
                    mobile_selection.write().clear();
                    apply(Surface::Mobile);
                },
                on_close: move |_| panel_open.set(false),
            }
        }
    }
}

/// Execute a priority plan: the active slide immediately, the rest on the
/// next animation frame so the swap never blocks the interaction.
fn run_priority_plan(mut catalog: Signal<Catalog>, plan: PriorityLoad) {
    if let Some(url) = &plan.now {
        catalog.write().mark_loaded(url);
    }
    if plan.deferred.is_empty() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let deferred = plan.deferred;
        let frame = Closure::once(move |_: JsValue| {
            let mut catalog_ref = catalog.write();
            for url in &deferred {
                catalog_ref.mark_loaded(url);
            }
        });
        if window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .is_ok()
        {
            frame.forget();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut catalog_ref = catalog.write();
        for url in &plan.deferred {
            catalog_ref.mark_loaded(url);
        }
    }
}

/// Construct a widget session over the freshly rendered slides and hook up
/// its triggers: navigation and first pointer-down feed the priority load,
/// transitions and resizes feed the shared rescale.
#[cfg(target_arch = "wasm32")]
fn build_session(
    slide_count: usize,
    mut trigger_priority: impl FnMut() + Clone + 'static,
) -> Result<CarouselSession, JsValue> {
    let options = SwiperOptions {
        loop_slides: backline_common::loop_enabled(slide_count),
        space_between: 30.0,
        grab_cursor: true,
        next_selector: ".portfolio-next",
        prev_selector: ".portfolio-prev",
        breakpoints: vec![(320, 15.0), (768, 20.0), (1024, 30.0)],
    };

    let mut swiper = Swiper::new(".portfolio-swiper", &options)?;
    swiper.on("navigationNext", trigger_priority.clone())?;
    swiper.on("navigationPrev", trigger_priority.clone())?;
    swiper.on("transitionEnd", apply_player_scale)?;
    swiper.on("resize", apply_player_scale)?;

    let pointer_listener = swiper.root_element().map(|root| {
        ElementEventListener::new_once(root, "pointerdown", move |_| trigger_priority())
    });

    apply_player_scale();

    Ok(CarouselSession {
        swiper,
        _pointer_listener: pointer_listener,
    })
}

/// Measure the active slide's player shell once and publish the shared scale
/// factor as a custom property on the slider root; every player viewport
/// picks it up from there.
#[cfg(target_arch = "wasm32")]
fn apply_player_scale() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    // Before the widget session exists there is no active slide; measure the
    // first shell instead, all slides share a width.
    let shell = document
        .query_selector(".portfolio-swiper .swiper-slide-active .player-shell")
        .ok()
        .flatten()
        .or_else(|| {
            document
                .query_selector(".portfolio-swiper .player-shell")
                .ok()
                .flatten()
        });
    let Some(shell) = shell else {
        return;
    };
    let Some(shell) = shell.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    let width = f64::from(shell.offset_width());
    if width <= 0.0 {
        return;
    }

    let scale = player_scale(width);
    if let Ok(Some(root)) = document.query_selector(".portfolio-swiper") {
        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            let _ = root
                .style()
                .set_property("--player-scale", &format!("{scale:.4}"));
        }
    }
}
