//! Mock transport for testing without a network
//!
//! Captures every dispatched request for assertion and answers with queued
//! responses or injected errors.

use async_trait::async_trait;
use courier::{HttpRequest, HttpResponse, Transport};
use courier::transport::{Result as TransportResult, TransportError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A recording transport
///
/// # Examples
///
/// ```rust,no_run
/// let transport = MockTransport::new();
/// transport.queue_json(200, serde_json::json!({"id": 1}));
/// let client = courier::TransportClient::with_transport(transport.clone());
/// // ... call the client ...
/// assert_eq!(transport.requests().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Requests sent through the transport
    requests: Arc<Mutex<Vec<HttpRequest>>>,

    /// Responses returned in order; an empty queue answers `200 {}`
    responses: Arc<Mutex<VecDeque<TransportResult<HttpResponse>>>>,
}

#[allow(dead_code)]
impl MockTransport {
    /// Create a new MockTransport with an empty response queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response
    pub fn queue_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, HashMap::new(), body.into())));
    }

    /// Queue a JSON response
    pub fn queue_json(&self, status: u16, body: serde_json::Value) {
        self.queue_response(status, serde_json::to_vec(&body).unwrap());
    }

    /// Queue a transport failure
    pub fn queue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// All requests sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_http(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, HashMap::new(), b"{}".to_vec())))
    }
}
