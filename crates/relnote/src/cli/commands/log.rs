//! Log command

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use relnote_git::GitRepo;
use relnote_notes::{CommitParser, CommitRecord, ReleaseNotes};

use super::RepositoryArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Parse commits from the local git history
#[derive(Debug, Args)]
pub struct LogCommand {
    /// Only include commits after this revision
    #[arg(long, value_name = "REV")]
    pub since: Option<String>,

    /// Maximum number of commits to read
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print every parsed commit instead of grouped release notes
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    hash: &'a str,
    #[serde(flatten)]
    record: &'a CommitRecord,
}

impl LogCommand {
    /// Execute the log command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(since = ?self.since, limit = ?self.limit, "executing log command");
        let config = self.repository.load_config()?;

        let cwd = std::env::current_dir()?;
        let repo = GitRepo::discover(&cwd)?;
        debug!(path = %repo.path().display(), "reading history");
        let commits = repo.history(self.since.as_deref(), self.limit)?;

        let parser = CommitParser::with_config(config.parser);
        let owner = &config.repository.owner;
        let name = &config.repository.repo;
        let records: Vec<CommitRecord> = commits
            .iter()
            .map(|commit| {
                debug!(hash = %commit.short_hash, subject = commit.subject(), "parsing commit");
                parser.parse(&commit.message, owner, name)
            })
            .collect();

        if cli.format == OutputFormat::Json {
            if self.all {
                let entries: Vec<LogEntry<'_>> = commits
                    .iter()
                    .zip(&records)
                    .map(|(commit, record)| LogEntry {
                        hash: &commit.hash,
                        record,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                let notes = ReleaseNotes::from_records(&records);
                println!("{}", serde_json::to_string_pretty(&notes)?);
            }
            return Ok(());
        }

        if commits.is_empty() {
            if !cli.quiet {
                output::warning("No commits in range");
            }
            return Ok(());
        }

        if self.all {
            for (commit, record) in commits.iter().zip(&records) {
                println!("{}", style(&commit.short_hash).yellow());
                for line in output::record_lines(record) {
                    println!("  {}", line);
                }
            }
            return Ok(());
        }

        let notes = ReleaseNotes::from_records(&records);
        if notes.is_empty() {
            if !cli.quiet {
                output::warning("Nothing to include in release notes");
            }
        } else {
            print!("{}", notes.format_markdown());
        }

        if notes.omitted > 0 && !cli.quiet {
            println!(
                "{}",
                output::key_value("omitted", &notes.omitted.to_string())
            );
        }

        Ok(())
    }
}
