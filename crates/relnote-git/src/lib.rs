//! relnote Git - Read-only access to commit history
//!
//! This crate walks a local repository and hands raw commit messages to the
//! parser. It never writes to the repository.

mod commits;
mod repository;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
