//! backline-ui - components and browser interop for the studio site
//!
//! Pure view components (the portfolio carousel, filter surfaces, shared
//! widgets) plus the typed bindings to the external carousel library and
//! the small observer/listener utilities they need.

pub mod components;
pub mod script_loader;
pub mod swiper;
pub mod wasm_utils;

pub use components::*;
