//! bild - async client for the Bild CAD-collaboration API
//!
//! Wraps the Bild HTTP/JSON API (users, projects, files, metadata, and
//! universal-format exports) behind a single client with a fixed set of
//! endpoint bindings.
//!
//! # Architecture
//!
//! - [`client`] - [`BildClient`], identifier defaults, endpoint operations
//! - [`transport`] - Transport trait with HTTP and mock implementations
//! - [`auth`] - Bearer credential resolution
//! - [`config`] - Client configuration and constants
//! - [`error`] - [`BildError`]
//!
//! # Behavior
//!
//! 1. Construction fails without a credential
//! 2. Explicit identifiers always win over stored defaults
//! 3. Each call sends exactly one request: no retries, paging, or caching
//! 4. Every failure is returned as a [`BildError`], never logged or swallowed
//!
//! # Example
//!
//! ```no_run
//! use bild::{AddUsersRequest, BildClient, Target};
//!
//! # async fn example() -> Result<(), bild::BildError> {
//! let mut client = BildClient::from_env()?;
//!
//! let projects = client.list_projects().await?;
//! println!("{}", projects);
//!
//! client.set_project("p1");
//! client.set_branch("main");
//! client.set_file("f1");
//! client.set_file_version("v7");
//! let export = client.generate_step(&Target::new()).await?;
//! println!("{}", export);
//!
//! client
//!     .add_users(AddUsersRequest::new(["new.hire@example.com"]).projects(["p1"]))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{AddUsersRequest, BildClient, Context, ResolvedTarget, Target, UniversalFormat};
pub use error::BildError;
