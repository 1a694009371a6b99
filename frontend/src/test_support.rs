use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::config::Config;
use crate::error::ApiError;
use crate::navigation::RecordingNavigator;
use crate::session::SessionStore;
use crate::storage::{KeyValueStore, MemoryStore};

pub use futures::executor::block_on;

/// Replays scripted responses in order and records what was sent.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn push(&self, response: Result<HttpResponse, ApiError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

/// A client wired to in-memory collaborators, with handles to inspect them.
pub struct Harness {
    pub client: ApiClient,
    pub store: MemoryStore,
    pub transport: Rc<MockTransport>,
    pub navigator: RecordingNavigator,
}

pub fn harness(responses: Vec<Result<HttpResponse, ApiError>>) -> Harness {
    let store = MemoryStore::new();
    let transport = Rc::new(MockTransport::new(responses));
    let navigator = RecordingNavigator::new();
    let client = ApiClient::new(
        SessionStore::new(Rc::new(store.clone())),
        transport.clone(),
        Rc::new(navigator.clone()),
    );
    Harness {
        client,
        store,
        transport,
        navigator,
    }
}

/// `harness` with a token already stored
pub fn signed_in(responses: Vec<Result<HttpResponse, ApiError>>) -> Harness {
    let h = harness(responses);
    h.store
        .set(Config::token_key(), "test-token")
        .expect("memory store never fails");
    h
}

pub fn json_response(status: u16, body: serde_json::Value) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::new(status, body.to_string()))
}
