//! error
//!
//! Error type returned by every client operation.
//!
//! # Design
//!
//! Three failure classes exist and they are kept distinct:
//! - construction without a credential (`MissingCredential`)
//! - a client-side precondition rejected before any request is sent
//!   (`InvalidArgument`)
//! - anything the transport or the remote API reported (`RemoteRequest`)
//!
//! Remote failures are not classified further. The message is carried over
//! verbatim from the underlying failure so callers see exactly what the
//! server or the HTTP stack said.
//!
//! # Example
//!
//! ```
//! use bild::BildError;
//!
//! let err = BildError::InvalidArgument("No emails provided".to_string());
//! assert_eq!(err.to_string(), "invalid argument: No emails provided");
//! ```

use thiserror::Error;

use crate::transport::TransportError;

/// Errors from client construction and API operations.
///
/// Error messages never include the credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BildError {
    /// No credential was supplied and none was found in the environment.
    #[error("no API key found. Set BILD_API_KEY in the environment or pass a token to the client")]
    MissingCredential,

    /// A precondition was violated before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The transport or the remote API reported a failure.
    #[error("{message}")]
    RemoteRequest {
        /// HTTP status code, when the failure came from an HTTP response
        status: Option<u16>,
        /// Message from the underlying failure
        message: String,
    },
}

impl BildError {
    /// HTTP status of a remote failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            BildError::RemoteRequest { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this error happened before any request was attempted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            BildError::MissingCredential | BildError::InvalidArgument(_)
        )
    }
}

impl From<TransportError> for BildError {
    fn from(err: TransportError) -> Self {
        let status = err.status();
        BildError::RemoteRequest {
            status,
            message: err.into_message(),
        }
    }
}
