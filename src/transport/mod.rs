//! transport
//!
//! The seam between the client and the network.
//!
//! # Modules
//!
//! - `traits`: [`Transport`] trait and the request/response types
//! - [`http`]: reqwest implementation used by default
//! - [`mock`]: in-memory implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpTransport;
pub use traits::*;
