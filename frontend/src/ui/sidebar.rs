use gloo_utils::{document, window};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::api::ApiClient;

/// Pages reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Enroll,
    Courses,
    Practice,
    Profile,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Enroll,
        NavItem::Courses,
        NavItem::Practice,
        NavItem::Profile,
    ];

    /// Value of the link's `data-page` attribute
    pub fn page(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "dashboard",
            NavItem::Enroll => "enroll",
            NavItem::Courses => "courses",
            NavItem::Practice => "practice",
            NavItem::Profile => "profile",
        }
    }

    pub fn from_page(page: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.page() == page)
    }
}

/// Sidebar entry for the current path. A course planner counts as Courses.
pub fn active_item(path: &str) -> Option<NavItem> {
    let first = path.trim_matches('/').split('/').next().unwrap_or_default();
    match first {
        "planner" => Some(NavItem::Courses),
        other => NavItem::from_page(other),
    }
}

/// Highlights the current page's link, fills in the user block and wires
/// the logout button.
pub fn setup_sidebar(client: &ApiClient) -> Result<(), JsValue> {
    let path = window().location().pathname()?;
    let active = active_item(&path);
    debug!("Sidebar active item for {}: {:?}", path, active);

    let document = document();
    let links = document.query_selector_all("[data-page]")?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let is_active = link
            .get_attribute("data-page")
            .and_then(|page| NavItem::from_page(&page))
            .is_some_and(|item| Some(item) == active);
        link.class_list().toggle_with_force("active", is_active)?;
    }

    match client.session().get_user() {
        Ok(Some(user)) => {
            set_text("user-name", user.display_name());
            set_text("user-email", user.email.as_deref().unwrap_or_default());
            set_text("user-avatar", &user.initial());
        }
        Ok(None) => {}
        Err(e) => warn!("Skipping sidebar user info: {}", e),
    }

    if let Some(button) = document.get_element_by_id("logout-btn") {
        let client = client.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            crate::api::auth::logout(&client);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // lives as long as the page
        on_click.forget();
    }

    Ok(())
}

fn set_text(id: &str, text: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("/dashboard", Some(NavItem::Dashboard))]
    #[test_case("/courses/", Some(NavItem::Courses))]
    #[test_case("/planner/42", Some(NavItem::Courses))]
    #[test_case("/practice", Some(NavItem::Practice))]
    #[test_case("/profile", Some(NavItem::Profile))]
    #[test_case("/enroll", Some(NavItem::Enroll))]
    #[test_case("/", None)]
    #[test_case("/unknown", None)]
    fn test_active_item(path: &str, expected: Option<NavItem>) {
        assert_eq!(active_item(path), expected);
    }

    #[test]
    fn test_pages_round_trip() {
        for item in NavItem::ALL {
            assert_eq!(NavItem::from_page(item.page()), Some(item));
        }
        assert_eq!(NavItem::from_page("planner"), None);
    }
}
