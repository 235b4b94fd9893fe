//! Storage layer
//!
//! Loads and saves the TOML configuration holding default request options.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
