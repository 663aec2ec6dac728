//! Git repository access

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Oid, Repository};
use tracing::{debug, info, instrument};

use relnote_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Read-only repository handle
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::RepositoryNotFound(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            repo,
        })
    }

    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a revision (hash, branch, tag, `HEAD~3`, ...) to a commit id
    pub fn resolve(&self, rev: &str) -> Result<Oid> {
        let object = self.repo.revparse_single(rev).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::RevisionNotFound(rev.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;

        let commit = object.peel_to_commit()?;
        debug!(rev, oid = %commit.id(), "resolved revision");
        Ok(commit.id())
    }

    /// Id of the HEAD commit
    pub fn head_id(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(|e| {
            if e.code() == ErrorCode::UnbornBranch {
                GitError::NoCommits
            } else {
                GitError::Git2(e)
            }
        })?;

        Ok(head.peel_to_commit()?.id())
    }
}
