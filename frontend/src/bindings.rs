//! Functions exported to the page scripts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{LoginRequest, SignupRequest, UserProfile};
use wasm_bindgen::prelude::*;

use crate::api::{auth, ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::format;
use crate::ui::chart::{self, LineChartConfig};
use crate::ui::{loading, sidebar, toast};

/// Resolves to the parsed JSON body, or `null` when the session expired
/// (in which case the page is already navigating away).
#[wasm_bindgen(js_name = apiFetch)]
pub async fn api_fetch(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(&options)?;
    match ApiClient::browser().api_fetch(&endpoint, options).await? {
        Some(body) => js_sys::JSON::parse(&body.to_string()),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen(js_name = requireAuth)]
pub fn require_auth() -> bool {
    let client = ApiClient::browser();
    client.session().require_auth(client.navigator())
}

#[wasm_bindgen]
pub fn logout() {
    auth::logout(&ApiClient::browser());
}

/// Email/password login. Resolves to `{access_token, token_type, user}`
/// once the session is stored; bad credentials reject with the server's
/// message.
#[wasm_bindgen]
pub async fn login(email: String, password: String) -> Result<JsValue, JsValue> {
    let request = LoginRequest { email, password };
    let session = auth::login(&ApiClient::browser(), &request).await?;
    to_js(&session)
}

/// Takes the signup form as an object (`name`, `email`, `password` and
/// the optional profile fields).
#[wasm_bindgen]
pub async fn signup(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SignupRequest = from_js(&request)?;
    let session = auth::signup(&ApiClient::browser(), &request).await?;
    to_js(&session)
}

#[wasm_bindgen(js_name = googleLogin)]
pub async fn google_login(token: String) -> Result<JsValue, JsValue> {
    let session = auth::google_login(&ApiClient::browser(), &token).await?;
    to_js(&session)
}

#[wasm_bindgen(js_name = setToken)]
pub fn set_token(token: &str) -> Result<(), JsValue> {
    Ok(ApiClient::browser().session().set_token(token)?)
}

#[wasm_bindgen(js_name = setUser)]
pub fn set_user(user: JsValue) -> Result<(), JsValue> {
    let user: UserProfile = from_js(&user)?;
    Ok(ApiClient::browser().session().set_user(&user)?)
}

#[wasm_bindgen(js_name = getToken)]
pub fn get_token() -> Option<String> {
    ApiClient::browser().session().get_token()
}

#[wasm_bindgen(js_name = getUser)]
pub fn get_user() -> Result<JsValue, JsValue> {
    match ApiClient::browser().session().get_user()? {
        Some(user) => to_js(&user),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let kind = kind
        .map(|k| k.parse().unwrap_or_default())
        .unwrap_or_default();
    toast::show_toast(message, kind)
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(message: Option<String>) -> Result<(), JsValue> {
    loading::show_loading(message.as_deref())
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    loading::hide_loading();
}

#[wasm_bindgen(js_name = setupSidebar)]
pub fn setup_sidebar() -> Result<(), JsValue> {
    sidebar::setup_sidebar(&ApiClient::browser())
}

#[wasm_bindgen(js_name = renderLineChart)]
pub fn render_line_chart(
    canvas_id: &str,
    labels: JsValue,
    values: Vec<f64>,
    label: Option<String>,
) -> Result<(), JsValue> {
    let labels: Vec<Value> = from_js(&labels)?;
    let labels = labels.iter().map(label_text).collect();
    let mut config = LineChartConfig::new(labels, values);
    if let Some(label) = label {
        config = config.label(label);
    }
    chart::render_line_chart(canvas_id, &config)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(raw: &str) -> String {
    format::format_date(raw)
}

#[wasm_bindgen(js_name = formatMarkdown)]
pub fn format_markdown(text: &str) -> String {
    format::format_markdown(text)
}

fn options_from_js(options: &JsValue) -> Result<RequestOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(RequestOptions::default());
    }
    let value: Value = from_js(options)?;
    Ok(options_from_value(&value)?)
}

/// Goes through `JSON.stringify`, so only plain data survives.
fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, JsValue> {
    let encoded = js_sys::JSON::stringify(value)?
        .as_string()
        .unwrap_or_default();
    Ok(serde_json::from_str(&encoded).map_err(ApiError::from)?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let encoded = serde_json::to_string(value).map_err(ApiError::from)?;
    js_sys::JSON::parse(&encoded)
}

/// Axis text for a label passed from the page: strings as-is, numbers
/// and other values in their JSON form, `null` as blank.
pub fn label_text(label: &Value) -> String {
    match label {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a `fetch`-style options object: `method`, `headers`, `body`.
/// A non-string body is sent JSON-encoded.
pub fn options_from_value(value: &Value) -> Result<RequestOptions, ApiError> {
    let mut options = RequestOptions::default();

    if let Some(method) = value.get("method").and_then(Value::as_str) {
        options.method = method.parse()?;
    }

    if let Some(headers) = value.get("headers").and_then(Value::as_object) {
        for (name, header) in headers {
            let header = match header {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            options = options.header(name, &header);
        }
    }

    match value.get("body") {
        None | Some(Value::Null) => {}
        Some(Value::String(body)) => options.body = Some(body.clone()),
        Some(other) => options.body = Some(other.to_string()),
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_options_from_fetch_style_object() {
        let options = options_from_value(&json!({
            "method": "post",
            "headers": {"X-Trace": "1"},
            "body": "{\"subject\":\"Rust\"}"
        }))
        .unwrap();

        assert_eq!(options.method, Method::Post);
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
        assert_eq!(options.body.as_deref(), Some(r#"{"subject":"Rust"}"#));
    }

    #[test]
    fn test_object_body_is_encoded() {
        let options = options_from_value(&json!({"body": {"answers": ["a"]}})).unwrap();
        assert_eq!(options.method, Method::Get);
        assert_eq!(options.body.as_deref(), Some(r#"{"answers":["a"]}"#));
    }

    #[test]
    fn test_empty_and_bad_method() {
        assert_eq!(options_from_value(&json!({})).unwrap(), RequestOptions::default());
        assert!(options_from_value(&json!({"method": "CONNECT"})).is_err());
    }

    #[test]
    fn test_chart_labels_from_page_values() {
        let labels: Vec<String> = json!(["Week 1", 2, 3.5, true, null])
            .as_array()
            .unwrap()
            .iter()
            .map(label_text)
            .collect();
        assert_eq!(labels, vec!["Week 1", "2", "3.5", "true", ""]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_page_can_store_a_session() {
        set_token("page-token").unwrap();
        let user = js_sys::JSON::parse(r#"{"id": 7, "name": "Ada", "email": "ada@example.com"}"#)
            .unwrap();
        set_user(user).unwrap();

        assert_eq!(get_token().as_deref(), Some("page-token"));
        let stored = ApiClient::browser().session().get_user().unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Ada"));
        assert!(require_auth());

        ApiClient::browser().session().clear();
        assert_eq!(get_token(), None);
    }

    #[wasm_bindgen_test]
    fn test_set_user_rejects_non_objects() {
        assert!(set_user(JsValue::from_str("Ada")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_numeric_chart_labels_are_not_debug_text() {
        let labels = js_sys::JSON::parse(r#"[1, "Two"]"#).unwrap();
        let labels: Vec<Value> = from_js(&labels).unwrap();
        let labels: Vec<String> = labels.iter().map(label_text).collect();
        assert_eq!(labels, vec!["1", "Two"]);
    }
}
