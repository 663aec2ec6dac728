//! relnote Core - Shared foundations for relnote
//!
//! This crate provides error handling and configuration loading for the
//! relnote crates.

pub mod config;
pub mod error;

pub use config::{Config, ParserConfig, RepositoryConfig};
pub use error::{ConfigError, GitError, RelnoteError, Result};
