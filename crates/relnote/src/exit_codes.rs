//! Exit codes for the CLI

use relnote_core::{ConfigError, GitError, RelnoteError};

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RelnoteError>() {
        Some(RelnoteError::Config(_)) => CONFIG_ERROR,
        Some(RelnoteError::Git(_)) => GIT_ERROR,
        None if err.is::<ConfigError>() => CONFIG_ERROR,
        None if err.is::<GitError>() => GIT_ERROR,
        None => ERROR,
    }
}
