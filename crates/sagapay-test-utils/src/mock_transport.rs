//! Mock implementation of the `Transport` trait for testing.
//!
//! Records every request it is handed and answers from a queue of canned
//! responses, so tests can assert both what the client sent and whether it
//! sent anything at all.

use async_trait::async_trait;
use sagapay_client::{HttpRequest, HttpResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

struct MockTransportInner {
    /// Responses handed out in order, one per request.
    queued: VecDeque<Result<HttpResponse, TransportError>>,
    /// Answer used once the queue is empty.
    fallback: Result<HttpResponse, TransportError>,
    /// Every request received, in order.
    requests: Vec<HttpRequest>,
}

/// A mock implementation of the `Transport` trait for testing.
///
/// Uses `Arc<RwLock<...>>` internally, so it is cheap to clone and all
/// clones share the same state. Hand one clone to the client and keep
/// another for assertions.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<RwLock<MockTransportInner>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a mock answering `200 {}` to everything.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockTransportInner {
                queued: VecDeque::new(),
                fallback: Ok(HttpResponse::new(200, "{}")),
                requests: Vec::new(),
            })),
        }
    }

    /// Answer every request with the given status and body.
    pub fn with_response(self, status: u16, body: impl Into<String>) -> Self {
        self.inner.write().unwrap().fallback = Ok(HttpResponse::new(status, body));
        self
    }

    /// Answer every request with the given status and JSON body.
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_response(status, body.to_string())
    }

    /// Fail every request without a response.
    pub fn with_failure(self, error: TransportError) -> Self {
        self.inner.write().unwrap().fallback = Err(error);
        self
    }

    /// Queue a one-shot response ahead of the fallback.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .queued
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a one-shot failure ahead of the fallback.
    pub fn push_failure(&self, error: TransportError) {
        self.inner.write().unwrap().queued.push_back(Err(error));
    }

    // =========================================================================
    // Assertion Helpers
    // =========================================================================

    /// Whether any request reached the transport.
    pub fn was_called(&self) -> bool {
        !self.inner.read().unwrap().requests.is_empty()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.inner.read().unwrap().requests.len()
    }

    /// All requests received.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.read().unwrap().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.read().unwrap().requests.last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.write().unwrap();
        inner.requests.push(request);
        match inner.queued.pop_front() {
            Some(answer) => answer,
            None => inner.fallback.clone(),
        }
    }
}
