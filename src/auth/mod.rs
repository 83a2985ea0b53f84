//! auth - bearer token handling
//!
//! The Bild API authenticates every request with a static bearer token.
//! There is no refresh or expiry handling; the token is resolved once when
//! the client is built and the `Authorization` header value is derived at
//! the same time.
//!
//! # Security
//!
//! Tokens never appear in logs, error messages, or `Debug` output.
//!
//! # Example
//!
//! ```
//! use bild::auth::Credential;
//! use bild::config::CredentialSource;
//!
//! let cred = Credential::resolve(&CredentialSource::Explicit("token".into())).unwrap();
//! assert_eq!(cred.bearer_header(), "Bearer token");
//! ```

mod credential;

pub use credential::Credential;
