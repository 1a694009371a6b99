use std::rc::Rc;

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ErrorResponse, Validate};

use crate::api::request::{merge_headers, RequestOptions};
use crate::api::transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport};
use crate::config::Config;
use crate::error::ApiError;
use crate::navigation::{BrowserNavigator, Navigator};
use crate::session::SessionStore;

/// Authenticated JSON client for the CurriForge API
#[derive(Clone)]
pub struct ApiClient {
    session: SessionStore,
    transport: Rc<dyn HttpTransport>,
    navigator: Rc<dyn Navigator>,
    base_url: String,
}

impl ApiClient {
    pub fn new(
        session: SessionStore,
        transport: Rc<dyn HttpTransport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            transport,
            navigator,
            base_url: Config::api_base_url().to_string(),
        }
    }

    /// localStorage, `fetch` and `window.location`
    pub fn browser() -> Self {
        Self::new(
            SessionStore::browser(),
            Rc::new(GlooTransport),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends a request with the stored credentials and returns the JSON body.
    ///
    /// A 401 logs the user out, navigates home and yields `Ok(None)`. Every
    /// other failure is logged and returned. There is no retry.
    pub async fn api_fetch(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        self.fetch_with_session(endpoint, options)
            .await
            .map_err(|e| log_failure(endpoint, e))
    }

    /// For endpoints that take no token (signup, login). A 401 here is an
    /// ordinary failure and leaves the stored session alone.
    pub async fn api_fetch_anonymous(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        self.fetch_anonymous(endpoint, options)
            .await
            .map_err(|e| log_failure(endpoint, e))
    }

    /// `api_fetch` decoded into `T`
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        match self.api_fetch(endpoint, options).await? {
            Some(body) => decode(endpoint, body).map(Some),
            None => Ok(None),
        }
    }

    pub async fn fetch_json_anonymous<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let body = self.api_fetch_anonymous(endpoint, options).await?;
        decode(endpoint, body)
    }

    async fn fetch_with_session(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let token = self.session.get_token();
        let response = self.send(endpoint, options, token.as_deref()).await?;

        if response.status == 401 {
            warn!("Session rejected by {}, logging out", endpoint);
            self.session.logout(self.navigator.as_ref());
            return Ok(None);
        }
        read_body(endpoint, &response).map(Some)
    }

    async fn fetch_anonymous(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let response = self.send(endpoint, options, None).await?;
        read_body(endpoint, &response)
    }

    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method: options.method,
            url: self.url(endpoint),
            headers: merge_headers(token, &options.headers),
            body: options.body,
        };
        debug!("Sending {} {}", request.method, request.url);
        self.transport.send(request).await
    }
}

fn read_body(endpoint: &str, response: &HttpResponse) -> Result<Value, ApiError> {
    if !response.ok() {
        // error bodies are best effort; an empty or non-JSON one gets the fallback
        let message = serde_json::from_str::<ErrorResponse>(&response.body)
            .map(|body| body.detail)
            .unwrap_or_else(|_| Config::fallback_error_message().to_string());
        return Err(ApiError::RequestFailed {
            status: response.status,
            message,
        });
    }

    let body: Value = serde_json::from_str(&response.body)?;
    debug!("{} succeeded with {}", endpoint, response.status);
    Ok(body)
}

/// Checks an outbound body before anything is sent.
pub fn validate_body<T: Validate>(endpoint: &str, body: &T) -> Result<(), ApiError> {
    shared::validate(body).map_err(|e| log_failure(endpoint, ApiError::from(e)))
}

fn log_failure(endpoint: &str, error: ApiError) -> ApiError {
    error!("API error on {}: {}", endpoint, error);
    error
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| {
        let err = ApiError::from(e);
        error!("Unexpected response shape from {}: {}", endpoint, err);
        err
    })
}
