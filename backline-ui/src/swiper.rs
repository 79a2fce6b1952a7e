//! Carousel widget bindings
//!
//! Typed Rust interface to the Swiper library's `window.Swiper` global,
//! which is injected lazily once the portfolio section nears the viewport
//! (see [`crate::script_loader`]). Only the slice of the widget API the
//! carousel actually uses is bound: construction, event registration,
//! active-slide lookup and teardown.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Configuration for one carousel session.
///
/// Mirrors the widget's construction object; slides-per-view is always
/// `"auto"` with centered slides, which is what the portfolio layout needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SwiperOptions {
    /// Wrap-around mode. The widget misbehaves in loop mode with two or
    /// fewer slides, so callers must gate this on slide count.
    pub loop_slides: bool,
    pub space_between: f64,
    pub grab_cursor: bool,
    pub next_selector: &'static str,
    pub prev_selector: &'static str,
    /// `(min viewport width, space between)` overrides.
    pub breakpoints: Vec<(u32, f64)>,
}

impl SwiperOptions {
    fn to_js(&self) -> Result<js_sys::Object, JsValue> {
        let opts = js_sys::Object::new();
        js_sys::Reflect::set(&opts, &"loop".into(), &self.loop_slides.into())?;
        js_sys::Reflect::set(&opts, &"slidesPerView".into(), &"auto".into())?;
        js_sys::Reflect::set(&opts, &"centeredSlides".into(), &JsValue::TRUE)?;
        js_sys::Reflect::set(&opts, &"spaceBetween".into(), &self.space_between.into())?;
        js_sys::Reflect::set(&opts, &"grabCursor".into(), &self.grab_cursor.into())?;

        let navigation = js_sys::Object::new();
        js_sys::Reflect::set(&navigation, &"nextEl".into(), &self.next_selector.into())?;
        js_sys::Reflect::set(&navigation, &"prevEl".into(), &self.prev_selector.into())?;
        js_sys::Reflect::set(&opts, &"navigation".into(), &navigation)?;

        let breakpoints = js_sys::Object::new();
        for (width, space) in &self.breakpoints {
            let breakpoint = js_sys::Object::new();
            js_sys::Reflect::set(&breakpoint, &"spaceBetween".into(), &(*space).into())?;
            js_sys::Reflect::set(&breakpoints, &width.to_string().into(), &breakpoint)?;
        }
        js_sys::Reflect::set(&opts, &"breakpoints".into(), &breakpoints)?;

        Ok(opts)
    }
}

/// Handle to a live widget instance.
///
/// Event closures are owned by the handle, so dropping it (or calling
/// [`destroy`](Self::destroy)) detaches them with the instance.
pub struct Swiper {
    instance: JsValue,
    callbacks: Vec<Closure<dyn FnMut()>>,
}

impl Swiper {
    /// Whether the widget script has been loaded into the page yet.
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &"Swiper".into()).ok())
            .is_some_and(|ctor| ctor.is_function())
    }

    /// Construct a widget instance over the container matching `selector`.
    pub fn new(selector: &str, options: &SwiperOptions) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let ctor = js_sys::Reflect::get(&window, &"Swiper".into())?;
        let ctor = ctor
            .dyn_ref::<js_sys::Function>()
            .ok_or("Swiper is not loaded")?;

        let args = js_sys::Array::of2(&selector.into(), &options.to_js()?.into());
        let instance = js_sys::Reflect::construct(ctor, &args)?;

        Ok(Self {
            instance: instance.into(),
            callbacks: Vec::new(),
        })
    }

    /// Register a widget event callback (`navigationNext`, `navigationPrev`,
    /// `transitionEnd`, `resize`, ...).
    pub fn on(&mut self, event: &str, callback: impl FnMut() + 'static) -> Result<(), JsValue> {
        let closure: Closure<dyn FnMut()> = Closure::wrap(Box::new(callback));
        let on = js_sys::Reflect::get(&self.instance, &"on".into())?;
        let on = on.dyn_ref::<js_sys::Function>().ok_or("on is not a function")?;
        on.call2(&self.instance, &event.into(), closure.as_ref().unchecked_ref())?;
        self.callbacks.push(closure);
        Ok(())
    }

    /// The widget's root element, for raw DOM listeners.
    pub fn root_element(&self) -> Option<web_sys::Element> {
        js_sys::Reflect::get(&self.instance, &"el".into())
            .ok()?
            .dyn_into::<web_sys::Element>()
            .ok()
    }

    pub fn active_index(&self) -> Option<u32> {
        js_sys::Reflect::get(&self.instance, &"activeIndex".into())
            .ok()?
            .as_f64()
            .map(|index| index as u32)
    }

    /// Read an attribute off the active slide. Loop mode clones slides, so
    /// identity comes from data attributes rather than node references.
    pub fn active_slide_attr(&self, name: &str) -> Option<String> {
        let slides = js_sys::Reflect::get(&self.instance, &"slides".into()).ok()?;
        let slides = slides.dyn_into::<js_sys::Array>().ok()?;
        let active = slides.get(self.active_index()?);
        active
            .dyn_ref::<web_sys::Element>()?
            .get_attribute(name)
    }

    /// Tear the instance down, cleaning injected styles and slide markup.
    pub fn destroy(self) {
        if let Ok(destroy) = js_sys::Reflect::get(&self.instance, &"destroy".into()) {
            if let Some(destroy) = destroy.dyn_ref::<js_sys::Function>() {
                let _ = destroy.call2(&self.instance, &JsValue::TRUE, &JsValue::TRUE);
            }
        }
    }
}
