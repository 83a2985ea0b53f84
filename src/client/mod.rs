//! client
//!
//! The Bild API client.
//!
//! # Design
//!
//! [`BildClient`] holds the resolved credential, the API base, a shared
//! [`Transport`], and a [`Context`] of identifier defaults. Every endpoint
//! method follows the same path:
//!
//! 1. merge the call's [`Target`] over the context ([`Context::resolve`])
//! 2. interpolate the identifiers into a fixed path template
//! 3. send exactly one request with the shared auth header
//! 4. pass the outcome through [`normalize`]
//!
//! # Concurrency
//!
//! Endpoint methods take `&self` and may run concurrently. Context setters
//! take `&mut self`, so defaults cannot change under an in-flight call.
//! Clone the client to give another task its own defaults; clones share the
//! transport and its connection pool.
//!
//! # Example
//!
//! ```no_run
//! use bild::{BildClient, Target};
//!
//! # async fn example() -> Result<(), bild::BildError> {
//! let mut client = BildClient::new(Some("my-token"))?;
//! client.set_project("p1");
//! client.set_branch("main");
//!
//! let files = client.list_files(&Target::new()).await?;
//! let other = client.list_files(&Target::new().project("p2")).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod operations;
mod requests;

pub use context::{Context, ResolvedTarget, Target};
pub use requests::{AddUsersRequest, UniversalFormat, DEFAULT_ROLE};

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::auth::Credential;
use crate::config::{ClientConfig, CredentialSource, CONTENT_TYPE, DEFAULT_API_BASE};
use crate::error::BildError;
use crate::transport::{ApiRequest, Envelope, HttpTransport, Method, Transport, TransportError};

/// Client for the Bild HTTP API.
#[derive(Clone)]
pub struct BildClient {
    credential: Credential,
    api_base: String,
    transport: Arc<dyn Transport>,
    context: Context,
}

// Custom Debug to avoid exposing the credential
impl std::fmt::Debug for BildClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BildClient")
            .field("api_base", &self.api_base)
            .field("transport", &self.transport.name())
            .field("context", &self.context)
            .finish()
    }
}

impl BildClient {
    /// Create a client from an optional token.
    ///
    /// `None` or the sentinel `"env"` reads `BILD_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `BildError::MissingCredential` if no non-empty token is found.
    pub fn new(token: Option<&str>) -> Result<Self, BildError> {
        Self::from_config(ClientConfig {
            credential: CredentialSource::from_arg(token),
            ..ClientConfig::default()
        })
    }

    /// Create a client with the token from `BILD_API_KEY`.
    pub fn from_env() -> Result<Self, BildError> {
        Self::new(None)
    }

    /// Create a client from a configuration, using the HTTP transport.
    pub fn from_config(config: ClientConfig) -> Result<Self, BildError> {
        let credential = Credential::resolve(&config.credential)?;
        Ok(Self {
            credential,
            api_base: config.api_base,
            transport: Arc::new(HttpTransport::new()),
            context: Context::default(),
        })
    }

    /// Create a client that sends through `transport`.
    pub fn with_transport(credential: Credential, transport: Arc<dyn Transport>) -> Self {
        Self {
            credential,
            api_base: DEFAULT_API_BASE.to_string(),
            transport,
            context: Context::default(),
        }
    }

    /// Replace the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// API base URL requests are sent to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `Authorization` header value sent with every request.
    pub fn auth_header(&self) -> &str {
        self.credential.bearer_header()
    }

    /// Current identifier defaults.
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn set_project(&mut self, project_id: impl Into<String>) {
        self.context.project = Some(project_id.into());
    }

    pub fn set_branch(&mut self, branch_id: impl Into<String>) {
        self.context.branch = Some(branch_id.into());
    }

    pub fn set_file(&mut self, file_id: impl Into<String>) {
        self.context.file = Some(file_id.into());
    }

    pub fn set_file_version(&mut self, file_version_id: impl Into<String>) {
        self.context.file_version = Some(file_version_id.into());
    }

    /// Forget all identifier defaults.
    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    /// Build the request for `path` with the shared headers.
    fn build_request(&self, method: Method, path: &str, body: Option<Value>) -> ApiRequest {
        let request = ApiRequest::new(method, format!("{}{}", self.api_base, path))
            .with_header("Authorization", self.credential.bearer_header())
            .with_header("Content-Type", CONTENT_TYPE);
        match body {
            Some(body) => request.with_body(body),
            None => request,
        }
    }

    /// Send one request and normalize its outcome.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, BildError> {
        let request = self.build_request(method, path, body);
        debug!(%method, path, transport = self.transport.name(), "sending request");

        let outcome = self.transport.send(request).await;
        if let Ok(envelope) = &outcome {
            trace!(status = envelope.status, path, "request completed");
        }
        normalize(outcome)
    }
}

/// Turn a transport outcome into an operation result.
///
/// Success yields only the envelope's payload. Every transport failure,
/// including a bare message, becomes `BildError::RemoteRequest` with the
/// original message.
///
/// ```
/// use bild::client::normalize;
/// use bild::transport::{Envelope, TransportError};
/// use bild::BildError;
/// use serde_json::json;
///
/// assert_eq!(normalize(Ok(Envelope::ok(json!({"id": 1})))), Ok(json!({"id": 1})));
///
/// let err = normalize(Err(TransportError::Message("boom".into()))).unwrap_err();
/// assert_eq!(err, BildError::RemoteRequest { status: None, message: "boom".into() });
/// ```
pub fn normalize(outcome: Result<Envelope, TransportError>) -> Result<Value, BildError> {
    match outcome {
        Ok(envelope) => Ok(envelope.data),
        Err(err) => Err(err.into()),
    }
}
