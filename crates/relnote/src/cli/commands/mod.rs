//! CLI commands

mod comment;
mod completions;
mod init;
mod log;
mod note;
mod parse;

pub use comment::CommentCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use log::LogCommand;
pub use note::NoteCommand;
pub use parse::ParseCommand;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use relnote_core::config::{load_config_or_default, validate_config, Config};

/// Text input shared by commands that read a message or PR body
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to process (reads stdin when neither this nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Read the input text
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            debug!(path = %path.display(), "reading input file");
            return Ok(std::fs::read_to_string(path)?);
        }

        debug!("reading input from stdin");
        Ok(std::io::read_to_string(std::io::stdin())?)
    }
}

/// Repository identity overrides
#[derive(Debug, Args)]
pub struct RepositoryArgs {
    /// Owner used for references without one (overrides config)
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository used for references without one (overrides config)
    #[arg(long)]
    pub repo: Option<String>,

    /// Track backports from this repository instead of the configured set
    #[arg(long = "follow", value_name = "OWNER/REPO")]
    pub follow: Vec<String>,
}

impl RepositoryArgs {
    /// Load configuration from the working directory and apply overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let cwd = std::env::current_dir()?;
        let (mut config, path) = load_config_or_default(&cwd)?;
        debug!(config_path = ?path, "configuration resolved");

        if let Some(owner) = &self.owner {
            config.repository.owner = owner.clone();
        }
        if let Some(repo) = &self.repo {
            config.repository.repo = repo.clone();
        }
        if !self.follow.is_empty() {
            config.parser = config.parser.with_follow_repos(self.follow.iter().cloned());
        }

        validate_config(&config)?;
        Ok(config)
    }
}
