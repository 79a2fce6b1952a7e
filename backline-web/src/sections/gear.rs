//! Gear map: region hotspots, one-open instrument panels and the instrument
//! modal with a sound preview. One sample plays at a time.

use crate::data::{self, Instrument};
use backline_ui::{Modal, PlayIcon, XIcon};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn GearSection() -> Element {
    let regions = use_hook(data::gear_regions);
    let mut open_region = use_signal(|| None::<usize>);
    let mut selected: Signal<Option<Instrument>> = use_signal(|| None);
    let mut map_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    #[cfg(target_arch = "wasm32")]
    let mut current_audio: Signal<Option<web_sys::HtmlAudioElement>> = use_signal(|| None);

    let modal_open: ReadSignal<bool> = use_memo(move || selected.read().is_some()).into();

    let mut close_modal = move || {
        #[cfg(target_arch = "wasm32")]
        if let Some(audio) = current_audio.write().take() {
            let _ = audio.pause();
        }
        selected.set(None);
    };

    rsx! {
        section { id: "gear", class: "gear-section",
            div { class: "section-heading",
                h2 { "The Percussion Room" }
                p { "An instrument collection gathered from three continents. Pick a region." }
            }
            div {
                class: "percussion-map",
                onmounted: move |evt| map_element.set(Some(evt.data())),
                for (index, region) in regions.iter().enumerate() {
                    button {
                        key: "{region.id}",
                        class: if open_region() == Some(index) { "map-dot active" } else { "map-dot" },
                        aria_pressed: if open_region() == Some(index) { "true" } else { "false" },
                        onclick: move |_| {
                            let was_open = open_region() == Some(index);
                            open_region.set(if was_open { None } else { Some(index) });
                        },
                        span { class: "map-dot-label", "{region.name}" }
                    }
                }
            }
            for (index, region) in regions.iter().enumerate() {
                if open_region() == Some(index) {
                    div {
                        key: "{region.id}",
                        class: "instrument-panel",
                        id: "panel-{region.id}",
                        // The panel mounts fresh each time it opens.
                        onmounted: move |_evt| {
                            #[cfg(target_arch = "wasm32")]
                            {
                                let data = _evt.data();
                                if let Some(element) = data.downcast::<web_sys::Element>() {
                                    backline_ui::wasm_utils::scroll_into_center(element);
                                }
                            }
                        },
                        button {
                            class: "close-panel-btn",
                            aria_label: "Close panel",
                            onclick: move |_| {
                                open_region.set(None);
                                #[cfg(target_arch = "wasm32")]
                                if let Some(map) = map_element.read().clone() {
                                    if let Some(element) = map.downcast::<web_sys::Element>() {
                                        backline_ui::wasm_utils::scroll_into_center(element);
                                    }
                                }
                            },
                            XIcon {}
                        }
                        h3 { "{region.name}" }
                        div { class: "instrument-list",
                            for instrument in region.instruments.clone() {
                                button {
                                    key: "{instrument.slug}",
                                    class: "instrument-list-item",
                                    onclick: {
                                        let instrument = instrument.clone();
                                        move |_| selected.set(Some(instrument.clone()))
                                    },
                                    "{instrument.name}"
                                }
                            }
                        }
                    }
                }
            }
            Modal {
                is_open: modal_open,
                on_close: move |_| close_modal(),
                class: "instrument-modal",
                match selected() {
                    Some(instrument) => rsx! {
                        div { class: "instrument-modal-body",
                            img {
                                src: "/assets/img/instruments/{instrument.slug}.webp",
                                alt: "{instrument.name}",
                            }
                            h3 { "{instrument.name}" }
                            p { "{instrument.description}" }
                            button {
                                class: "instrument-sound-btn",
                                onclick: {
                                    let slug = instrument.slug;
                                    move |_| {
                                        #[cfg(target_arch = "wasm32")]
                                        play_sample(&mut current_audio, slug);
                                        #[cfg(not(target_arch = "wasm32"))]
                                        let _ = slug;
                                    }
                                },
                                PlayIcon {}
                                span { "Hear it" }
                            }
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}

/// Swap in a fresh audio element for the sample; whatever was playing stops.
#[cfg(target_arch = "wasm32")]
fn play_sample(current_audio: &mut Signal<Option<web_sys::HtmlAudioElement>>, slug: &str) {
    if let Some(previous) = current_audio.write().take() {
        let _ = previous.pause();
    }
    match web_sys::HtmlAudioElement::new_with_src(&format!("/assets/audio/{slug}.mp3")) {
        Ok(audio) => {
            if let Ok(promise) = audio.play() {
                wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        tracing::warn!("instrument sample playback failed");
                    }
                });
            }
            *current_audio.write() = Some(audio);
        }
        Err(err) => tracing::warn!("could not create sample audio element: {err:?}"),
    }
}
