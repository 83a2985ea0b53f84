//! transport::http
//!
//! reqwest-backed [`Transport`].
//!
//! # Error mapping
//!
//! - connection failures map to `TransportError::Network`
//! - non-2xx responses map to `TransportError::Status`, with the message
//!   taken from the JSON body's `message` or `error` field, else the raw body
//!   text, else `Request failed with status code <n>`
//! - a request body that cannot be encoded maps to `TransportError::Json`
//!
//! Every 2xx response is a success. An empty body decodes to JSON `null`
//! and a body that is not JSON is kept as a JSON string.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::traits::{ApiRequest, Envelope, Method, Transport, TransportError};

/// HTTP transport using a pooled reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport around an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, request: ApiRequest) -> Result<Envelope, TransportError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            // Keeps the Content-Type header set above.
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(send_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        Ok(Envelope {
            status: status.as_u16(),
            data: success_payload(text),
        })
    }
}

/// Classify a failure to send: body encoding errors, otherwise network.
fn send_error(err: reqwest::Error) -> TransportError {
    let is_encoding = std::error::Error::source(&err)
        .map_or(false, |source| source.is::<serde_json::Error>());
    if is_encoding {
        TransportError::Json(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Decode a 2xx body. Non-JSON text is returned as a JSON string.
fn success_payload(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Pick the most specific message available from an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status code {}", status.as_u16())
    } else {
        body.to_string()
    }
}
