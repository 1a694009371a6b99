use gloo_utils::{body, document};
use wasm_bindgen::JsValue;

pub const OVERLAY_ID: &str = "loading-overlay";
pub const DEFAULT_MESSAGE: &str = "Loading...";

/// Covers the page with a spinner. Replaces any overlay already shown.
pub fn show_loading(message: Option<&str>) -> Result<(), JsValue> {
    hide_loading();

    let document = document();
    let overlay = document.create_element("div")?;
    overlay.set_id(OVERLAY_ID);
    overlay.set_class_name("loading-overlay");

    let spinner = document.create_element("div")?;
    spinner.set_class_name("spinner");
    overlay.append_child(&spinner)?;

    let text = document.create_element("p")?;
    text.set_class_name("loading-message");
    text.set_text_content(Some(message.unwrap_or(DEFAULT_MESSAGE)));
    overlay.append_child(&text)?;

    body().append_child(&overlay)?;
    Ok(())
}

pub fn hide_loading() {
    if let Some(overlay) = document().get_element_by_id(OVERLAY_ID) {
        overlay.remove();
    }
}
