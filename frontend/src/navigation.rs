use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};

/// Full-page navigation, kept apart from session state so the
/// request path can be exercised without a window.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        debug!("Navigating to {}", path);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(path) {
                    error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
            None => error!("No window available to navigate to {}", path),
        }
    }
}

/// Records requested paths instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}
