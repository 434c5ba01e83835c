//! Storage layer for ly-mcp
//!
//! Handles the TOML configuration file under the user's config directory.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
