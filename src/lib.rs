#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod carousel;
pub mod catalog;
pub mod motion;
pub mod portfolio;
pub mod reveal;
pub mod section;
pub mod site;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::hydrate_body(App);
}
