//! Commit history walking

use chrono::{TimeZone, Utc};
use git2::{Oid, Sort};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits reachable from HEAD, newest first.
    ///
    /// With `since`, that revision and its ancestors are left out. `limit`
    /// caps the number of commits returned.
    #[instrument(skip(self))]
    pub fn history(&self, since: Option<&str>, limit: Option<usize>) -> Result<Vec<CommitInfo>> {
        let hide = since.map(|rev| self.resolve(rev)).transpose()?;
        self.walk(hide, limit)
    }

    fn walk(&self, hide: Option<Oid>, limit: Option<usize>) -> Result<Vec<CommitInfo>> {
        let head = self.head_id()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;
        if let Some(hide) = hide {
            revwalk.hide(hide)?;
        }

        let mut commits = Vec::new();

        for oid in revwalk.take(limit.unwrap_or(usize::MAX)) {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "walked commit history");
        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    // Non UTF-8 messages are decoded lossily rather than dropped
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

    let timestamp = Utc
        .timestamp_opt(commit.time().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    CommitInfo::new(
        hash,
        message,
        author.name().unwrap_or("Unknown"),
        timestamp,
    )
}
