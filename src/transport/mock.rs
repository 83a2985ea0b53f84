//! transport::mock
//!
//! In-memory transport for deterministic testing.
//!
//! # Design
//!
//! The mock records every request it receives and answers from a queue of
//! scripted outcomes. When the queue is empty it answers with its default
//! envelope. A configured failure overrides both.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bild::auth::Credential;
//! use bild::transport::mock::MockTransport;
//! use bild::BildClient;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let transport = MockTransport::new().with_data(json!({"id": 1}));
//! let client = BildClient::with_transport(
//!     Credential::new("token").unwrap(),
//!     Arc::new(transport.clone()),
//! );
//!
//! let users = client.list_users().await.unwrap();
//! assert_eq!(users, json!({"id": 1}));
//! assert_eq!(transport.request_count(), 1);
//! # });
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::{ApiRequest, Envelope, Transport, TransportError};

/// Mock transport for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug)]
struct MockTransportInner {
    /// Answer used when nothing is queued.
    default_envelope: Envelope,
    /// Scripted outcomes, consumed in order.
    queued: VecDeque<Result<Envelope, TransportError>>,
    /// Failure returned for every request while set.
    fail_with: Option<TransportError>,
    /// Recorded requests for verification.
    requests: Vec<ApiRequest>,
}

impl MockTransport {
    /// Create a mock answering every request with a 200 `null` envelope.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockTransportInner {
                default_envelope: Envelope::ok(Value::Null),
                queued: VecDeque::new(),
                fail_with: None,
                requests: Vec::new(),
            })),
        }
    }

    /// Set the payload of the default envelope.
    pub fn with_data(self, data: Value) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.default_envelope = Envelope::ok(data);
        }
        self
    }

    /// Fail every request with `error` until cleared.
    ///
    /// ```
    /// use bild::transport::mock::MockTransport;
    /// use bild::transport::TransportError;
    ///
    /// let transport = MockTransport::new()
    ///     .fail_with(TransportError::Message("socket hang up".into()));
    /// ```
    pub fn fail_with(self, error: TransportError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_with = Some(error);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_failure(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_with = None;
    }

    /// Queue one outcome for the next request.
    pub fn push_response(&self, outcome: Result<Envelope, TransportError>) {
        let mut inner = self.inner.lock().unwrap();
        inner.queued.push_back(outcome);
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ApiRequest> {
        let inner = self.inner.lock().unwrap();
        inner.requests.last().cloned()
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.requests.len()
    }

    /// Clear recorded requests.
    pub fn clear_requests(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.clear();
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);

        if let Some(error) = &inner.fail_with {
            return Err(error.clone());
        }

        match inner.queued.pop_front() {
            Some(outcome) => outcome,
            None => Ok(inner.default_envelope.clone()),
        }
    }
}
