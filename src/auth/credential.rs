//! auth::credential
//!
//! Bearer credential and its resolution from a [`CredentialSource`].
//!
//! # Security
//!
//! The token never appears in `Debug` output or in error messages.

use std::fmt;

use crate::config::{CredentialSource, API_KEY_ENV};
use crate::error::BildError;

/// A non-empty bearer token together with its precomputed header value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    bearer: String,
}

// Custom Debug to avoid exposing the token
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    /// Wrap a token.
    ///
    /// # Errors
    ///
    /// Returns `BildError::MissingCredential` if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, BildError> {
        let token = token.into();
        if token.is_empty() {
            return Err(BildError::MissingCredential);
        }
        let bearer = format!("Bearer {}", token);
        Ok(Self { token, bearer })
    }

    /// Resolve a credential from the process environment.
    pub fn resolve(source: &CredentialSource) -> Result<Self, BildError> {
        Self::resolve_with(source, |key| std::env::var(key).ok())
    }

    /// Resolve a credential using `lookup` in place of the process environment.
    ///
    /// An explicit token never consults `lookup`.
    ///
    /// ```
    /// use bild::auth::Credential;
    /// use bild::config::CredentialSource;
    ///
    /// let cred = Credential::resolve_with(&CredentialSource::Environment, |_| {
    ///     Some("from-env".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(cred.bearer_header(), "Bearer from-env");
    /// ```
    pub fn resolve_with<F>(source: &CredentialSource, lookup: F) -> Result<Self, BildError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match source {
            CredentialSource::Explicit(token) => Self::new(token.clone()),
            CredentialSource::Environment => {
                let token = lookup(API_KEY_ENV).ok_or(BildError::MissingCredential)?;
                Self::new(token)
            }
        }
    }

    /// The raw token. Do not log it.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Authorization` header value, `Bearer <token>`.
    pub fn bearer_header(&self) -> &str {
        &self.bearer
    }
}
