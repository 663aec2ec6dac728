//! Parse command

use clap::Args;
use tracing::info;

use relnote_notes::CommitParser;

use super::{InputArgs, RepositoryArgs};
use crate::cli::{output, Cli, OutputFormat};

/// Parse a single commit message
#[derive(Debug, Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub repository: RepositoryArgs,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let config = self.repository.load_config()?;
        let message = self.input.read()?;
        info!(
            owner = %config.repository.owner,
            repo = %config.repository.repo,
            len = message.len(),
            "executing parse command"
        );

        let parser = CommitParser::with_config(config.parser);
        let record = parser.parse(&message, &config.repository.owner, &config.repository.repo);

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
            OutputFormat::Text => {
                for line in output::record_lines(&record) {
                    println!("{}", line);
                }
            }
        }

        Ok(())
    }
}
