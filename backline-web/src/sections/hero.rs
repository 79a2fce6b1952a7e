//! Hero reel: plays while visible, with an opt-in sound toggle.
//!
//! Autoplay and unmute-restart can both be rejected by the browser; either
//! way the failure is logged and swallowed, never surfaced.

use backline_ui::{VolumeIcon, VolumeMutedIcon};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use backline_ui::wasm_utils::VisibilityObserver;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[component]
pub fn HeroSection() -> Element {
    let mut muted = use_signal(|| true);
    #[cfg(target_arch = "wasm32")]
    let mut video_element: Signal<Option<web_sys::HtmlVideoElement>> = use_signal(|| None);
    #[cfg(target_arch = "wasm32")]
    let mut observer: Signal<Option<VisibilityObserver>> = use_signal(|| None);

    rsx! {
        section { id: "hero", class: "hero",
            video {
                class: "hero-video",
                src: "/assets/media/hero-reel.mp4",
                muted: true,
                r#loop: true,
                "playsinline": "true",
                onmounted: move |_evt| {
                    #[cfg(target_arch = "wasm32")]
                    {
                        let data = _evt.data();
                        if let Some(element) = data.downcast::<web_sys::Element>() {
                            if let Some(video) = element.dyn_ref::<web_sys::HtmlVideoElement>() {
                                let video = video.clone();
                                video_element.set(Some(video.clone()));
                                // Play only while at least 10% of the reel is on screen.
                                match VisibilityObserver::with_threshold(element, 0.1, move |visible| {
                                    if visible {
                                        play_video(&video);
                                    } else {
                                        let _ = video.pause();
                                    }
                                }) {
                                    Ok(obs) => observer.set(Some(obs)),
                                    Err(err) => tracing::warn!("hero visibility observer unavailable: {err:?}"),
                                }
                            }
                        }
                    }
                },
            }
            div {
                class: if muted() { "hero-overlay" } else { "hero-overlay sound-is-active" },
                h1 { "Backline Studio" }
                p { "Recording, mixing and mastering in the heart of the harbor district." }
            }
            button {
                class: if muted() { "sound-toggle is-blinking" } else { "sound-toggle" },
                aria_label: if muted() { "Unmute reel" } else { "Mute reel" },
                onclick: move |_| {
                    let now_muted = !muted();
                    muted.set(now_muted);
                    #[cfg(target_arch = "wasm32")]
                    if let Some(video) = video_element.read().clone() {
                        video.set_muted(now_muted);
                        if !now_muted {
                            // Restart from the top with sound.
                            video.set_current_time(0.0);
                            play_video(&video);
                        }
                    }
                },
                if muted() {
                    VolumeMutedIcon { class: "w-5 h-5" }
                } else {
                    VolumeIcon { class: "w-5 h-5" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn play_video(video: &web_sys::HtmlVideoElement) {
    if let Ok(promise) = video.play() {
        wasm_bindgen_futures::spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                tracing::debug!("hero video playback was prevented");
            }
        });
    }
}
