//! transport::traits
//!
//! Transport trait and the plain-data request/response types it exchanges.
//!
//! # Design
//!
//! The client never talks to the network directly. It describes each call
//! as an [`ApiRequest`] and hands it to a [`Transport`]. The transport
//! answers with either an [`Envelope`] (success) or a [`TransportError`];
//! the two outcomes are distinct types, so callers never inspect the shape
//! of a result to tell them apart.
//!
//! # Example
//!
//! ```ignore
//! use bild::transport::{ApiRequest, Method, Transport, TransportError};
//!
//! async fn ping(transport: &dyn Transport) -> Result<(), TransportError> {
//!     let request = ApiRequest::new(Method::Get, "https://api.getbild.com/users");
//!     let envelope = transport.send(request).await?;
//!     println!("status {}", envelope.status);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or a generic description
        message: String,
    },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The transport produced a bare error message.
    #[error("{0}")]
    Message(String),

    /// The request body could not be encoded as JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
}

impl TransportError {
    /// HTTP status code, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The underlying message, without the variant prefix.
    pub fn into_message(self) -> String {
        match self {
            TransportError::Status { message, .. } => message,
            TransportError::Network(message) => message,
            TransportError::Message(message) => message,
            TransportError::Json(message) => message,
        }
    }
}

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
        }
    }
}

/// A fully built request: absolute URL, headers, and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A successful response: the status plus the decoded JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    /// A 200 envelope around `data`.
    pub fn ok(data: Value) -> Self {
        Self { status: 200, data }
    }
}

/// Executes [`ApiRequest`]s.
///
/// Implementations must be `Send + Sync` so one transport can be shared by
/// clones of a client across tasks. A transport performs exactly one
/// exchange per call: no retries, no pagination, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transport name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Send one request and wait for its outcome.
    ///
    /// # Errors
    ///
    /// - `Status` for non-2xx responses
    /// - `Network` when no response was received
    /// - `Json` when the request body cannot be encoded
    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError>;
}
