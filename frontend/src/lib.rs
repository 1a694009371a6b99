use log::info;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod bindings;
pub mod config;
pub mod error;
pub mod format;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod ui {
    pub mod chart;
    pub mod loading;
    pub mod sidebar;
    pub mod toast;
}

pub use api::ApiClient;
pub use error::ApiError;
pub use session::SessionStore;

#[cfg(test)]
mod test_support;


/// Runs once when the module is instantiated by the page.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("CurriForge client initialized");
}
