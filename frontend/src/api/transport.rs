use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, warn};

use crate::api::request::Method;
use crate::error::ApiError;

/// Fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One round trip over the network. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = settle_body(status, response.text().await.map_err(|e| e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// An unreadable body only fails the request on success. Error bodies are
/// best effort, so a 401 still reaches the session teardown and other
/// failures get the fallback message.
fn settle_body(status: u16, read: Result<String, String>) -> Result<String, ApiError> {
    match read {
        Ok(body) => Ok(body),
        Err(e) if !(200..300).contains(&status) => {
            warn!("Ignoring unreadable body of a {} response: {}", status, e);
            Ok(String::new())
        }
        Err(e) => Err(ApiError::Transport(format!("Failed to read response body: {}", e))),
    }
}
