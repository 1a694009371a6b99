use std::fmt;
use std::str::FromStr;

use gloo_timers::callback::Timeout;
use gloo_utils::{body, document};
use uuid::Uuid;
use wasm_bindgen::JsValue;

use crate::config::Config;

pub const CONTAINER_ID: &str = "toast-container";

/// Delay between starting the exit animation and removing the element
const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub fn class_name(&self) -> String {
        format!("toast toast-{}", self.as_str())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown names fall back to `Info` rather than failing.
impl FromStr for ToastKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        })
    }
}

/// Pops a toast in the shared container and removes it after
/// `Config::toast_duration_ms`. The message is inserted as text.
pub fn show_toast(message: &str, kind: ToastKind) -> Result<(), JsValue> {
    let document = document();
    let container = match document.get_element_by_id(CONTAINER_ID) {
        Some(container) => container,
        None => {
            let container = document.create_element("div")?;
            container.set_id(CONTAINER_ID);
            container.set_class_name("toast-container");
            body().append_child(&container)?;
            container
        }
    };

    let toast = document.create_element("div")?;
    toast.set_id(&format!("toast-{}", Uuid::new_v4()));
    toast.set_class_name(&kind.class_name());
    toast.set_attribute("role", "status")?;

    let icon = document.create_element("span")?;
    icon.set_class_name("toast-icon");
    icon.set_text_content(Some(kind.icon()));
    toast.append_child(&icon)?;

    let text = document.create_element("span")?;
    text.set_class_name("toast-message");
    text.set_text_content(Some(message));
    toast.append_child(&text)?;

    container.append_child(&toast)?;

    Timeout::new(Config::toast_duration_ms(), move || {
        let _ = toast.class_list().add_1("toast-exit");
        Timeout::new(EXIT_ANIMATION_MS, move || toast.remove()).forget();
    })
    .forget();

    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_show_toast_appends_text_only() {
        show_toast("<b>saved</b>", ToastKind::Success).unwrap();
        show_toast("second", ToastKind::Error).unwrap();

        let container = document().get_element_by_id(CONTAINER_ID).unwrap();
        assert_eq!(container.child_element_count(), 2);

        let first = container.first_element_child().unwrap();
        assert_eq!(first.class_name(), "toast toast-success");
        assert!(first.inner_html().contains("&lt;b&gt;saved&lt;/b&gt;"));
    }
}
