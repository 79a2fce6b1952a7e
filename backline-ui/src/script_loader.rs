//! Deferred loading of external widget scripts.
//!
//! The carousel library is not part of the initial bundle; its script tag is
//! injected only once the hosting section nears the viewport. Load and
//! failure callbacks let the caller initialize the widget or degrade to the
//! static markup.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Inject `<script src=...>` into the document head.
///
/// The load/error closures are intentionally leaked: a script loads at most
/// once per page lifetime, so there is nothing to detach afterwards.
pub fn inject_script(
    src: &str,
    on_load: impl FnOnce() + 'static,
    on_error: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document")?;
    let head = document.head().ok_or("no document head")?;

    let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(src);
    tracing::debug!("injecting deferred script: {src}");

    let load = Closure::once(on_load);
    script.set_onload(Some(load.as_ref().unchecked_ref()));
    load.forget();

    let error = Closure::once(on_error);
    script.set_onerror(Some(error.as_ref().unchecked_ref()));
    error.forget();

    head.append_child(&script)?;
    Ok(())
}
