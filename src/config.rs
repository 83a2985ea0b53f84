//! config
//!
//! Client configuration and well-known constants.
//!
//! # Precedence
//!
//! The credential is resolved in this order:
//! 1. An explicit token passed to the client (or set on [`ClientConfig`])
//! 2. The `BILD_API_KEY` environment variable
//!
//! Passing the sentinel `"env"` as the token is the same as passing nothing.
//!
//! The API base is fixed to [`DEFAULT_API_BASE`] unless overridden on the
//! config, which exists for staging hosts and local test servers.
//!
//! # Example
//!
//! ```
//! use bild::config::{ClientConfig, CredentialSource};
//!
//! let config = ClientConfig::default()
//!     .with_credential("my-token")
//!     .with_api_base("http://localhost:8080/");
//!
//! assert_eq!(config.api_base, "http://localhost:8080");
//! assert_eq!(config.credential, CredentialSource::Explicit("my-token".to_string()));
//! ```

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BILD_API_KEY";

/// Token value meaning "read the credential from the environment".
pub const ENV_SENTINEL: &str = "env";

/// Production API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.getbild.com";

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Where the client gets its bearer token from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialSource {
    /// Token supplied by the caller.
    Explicit(String),
    /// Token read from [`API_KEY_ENV`] at construction.
    #[default]
    Environment,
}

impl CredentialSource {
    /// Map an optional caller-supplied token to a source.
    ///
    /// `None` and the [`ENV_SENTINEL`] both select the environment.
    pub fn from_arg(token: Option<&str>) -> Self {
        match token {
            None => CredentialSource::Environment,
            Some(ENV_SENTINEL) => CredentialSource::Environment,
            Some(token) => CredentialSource::Explicit(token.to_string()),
        }
    }
}

/// Settings used to construct a [`BildClient`](crate::BildClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Credential source
    pub credential: CredentialSource,
    /// API base URL, without a trailing slash
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credential: CredentialSource::Environment,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Use an explicit token instead of the environment.
    ///
    /// The [`ENV_SENTINEL`] is honored here too.
    pub fn with_credential(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.credential = CredentialSource::from_arg(Some(&token));
        self
    }

    /// Point the client at a different host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}
