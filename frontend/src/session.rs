use std::rc::Rc;

use log::{debug, error, warn};
use shared::{AuthResponse, UserProfile};

use crate::config::Config;
use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::storage::{BrowserStorage, KeyValueStore};

/// The persisted token/profile pair.
///
/// Nothing is cached here: every read goes to the backing store so that
/// concurrent requests and other tabs always see the current session.
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Stored bearer token. A blank string counts as absent.
    pub fn get_token(&self) -> Option<String> {
        self.store
            .get(Config::token_key())
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        self.store.set(Config::token_key(), token)
    }

    pub fn set_user(&self, profile: &UserProfile) -> Result<(), ApiError> {
        let encoded = serde_json::to_string(profile)?;
        self.store.set(Config::user_key(), &encoded)
    }

    /// `Ok(None)` when nothing is stored; a corrupt entry is an error.
    pub fn get_user(&self) -> Result<Option<UserProfile>, ApiError> {
        match self.store.get(Config::user_key()) {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                error!("Stored user profile is not valid JSON: {}", e);
                ApiError::from(e)
            }),
            None => Ok(None),
        }
    }

    /// Persists the credentials returned by signup/login.
    pub fn save(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        self.set_token(&auth.access_token)?;
        self.set_user(&auth.user)?;
        debug!("Session stored for {}", auth.user.display_name());
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Drops both entries. Safe to call repeatedly.
    pub fn clear(&self) {
        self.store.remove(Config::token_key());
        self.store.remove(Config::user_key());
    }

    /// Clears the session and sends the browser back to the landing page.
    /// Callers should not assume the page keeps running afterwards.
    pub fn logout(&self, navigator: &dyn Navigator) {
        self.clear();
        navigator.navigate(Config::root_path());
    }

    /// Page guard: true when a token exists, otherwise redirects and
    /// returns false.
    pub fn require_auth(&self, navigator: &dyn Navigator) -> bool {
        if self.is_authenticated() {
            return true;
        }
        warn!("No session token, redirecting to {}", Config::root_path());
        navigator.navigate(Config::root_path());
        false
    }
}
