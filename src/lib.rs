//! # percolate-client
//!
//! Binding for the search engine's `_percolate` REST endpoint.
//!
//! The binding validates parameters, renames camelCase options to their
//! wire names, builds the URL and hands the finished request to a
//! [`Dispatcher`](api::transport::Dispatcher). It never performs I/O itself.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use percolate_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> percolate_client::Result<()> {
//!     let binding = Percolate::new(my_dispatcher);
//!
//!     let params = Params::new()
//!         .with("index", "tweets")
//!         .with("type", "_doc")
//!         .with("body", serde_json::json!({ "doc": { "message": "bonsai tree" } }));
//!
//!     let response = binding.send(params, Options::default()).await?;
//!     println!("{:?}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`]: the binding, its inputs and the dispatcher seam
//! - [`storage`]: TOML configuration with default request options
//! - [`utils`]: path encoding and validation helpers
//! - [`cli`]: the `percolate` command line
//! - [`error`]: error types

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{AppError, ClientError, ConfigurationError, Failure};

    pub use crate::api::models::{ApiResponse, Method, Request, RequestOptions};
    pub use crate::api::params::{Ignore, Options, Params};
    pub use crate::api::percolate::{Invocation, Percolate};
    pub use crate::api::transport::{Callback, Dispatcher, Outcome, PendingResponse};

    pub use crate::storage::config::Config;
}

/// API layer - endpoint binding and dispatcher seam.
///
/// - [`api::percolate`]: the `_percolate` binding
/// - [`api::params`]: caller-facing parameters and options
/// - [`api::models`]: request and response structures
/// - [`api::transport`]: the [`Dispatcher`](api::transport::Dispatcher) trait
pub mod api;

/// Command-line front end
pub mod cli;

/// Storage layer - configuration persistence.
pub mod storage;

/// Utilities layer - encoding and validation helpers.
pub mod utils;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
