pub struct Config;

impl Config {
    /// Every backend route lives under this prefix. Both the dev proxy and
    /// the production server serve the API from the page's own origin.
    pub fn api_base_url() -> &'static str {
        "/api"
    }

    /// Landing page, which doubles as the login screen
    pub fn root_path() -> &'static str {
        "/"
    }

    pub fn token_key() -> &'static str {
        "curriforge_token"
    }

    pub fn user_key() -> &'static str {
        "curriforge_user"
    }

    pub fn toast_duration_ms() -> u32 {
        3000
    }

    pub fn fallback_error_message() -> &'static str {
        "Something went wrong"
    }
}
