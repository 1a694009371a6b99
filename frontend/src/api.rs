pub mod auth;
pub mod chat;
pub mod client;
pub mod courses;
pub mod practice;
pub mod request;
pub mod transport;

pub use client::ApiClient;
pub use request::{Method, RequestOptions};
pub use transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport};

