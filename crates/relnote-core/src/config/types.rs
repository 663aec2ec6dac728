//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_FOLLOW_REPOS, DEFAULT_OWNER, DEFAULT_REPO};

/// Main configuration for relnote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository that bare `#1234` references point at
    pub repository: RepositoryConfig,

    /// Commit parser configuration
    pub parser: ParserConfig,
}

/// Default repository identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

/// Commit parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// `owner/repo` pairs whose cross-repo backport references are tracked
    pub follow_repos: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            follow_repos: DEFAULT_FOLLOW_REPOS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Replace the follow-set
    pub fn with_follow_repos<I, S>(mut self, repos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.follow_repos = repos.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether backports from `owner/repo` are tracked
    pub fn follows(&self, owner: &str, repo: &str) -> bool {
        self.follow_repos.iter().any(|slug| {
            slug.split_once('/')
                .is_some_and(|(o, r)| o == owner && r == repo)
        })
    }
}
