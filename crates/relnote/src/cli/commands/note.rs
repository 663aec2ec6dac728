//! Note command

use clap::Args;
use console::style;
use tracing::info;

use relnote_notes::extract_note;

use super::InputArgs;
use crate::cli::{Cli, OutputFormat};

/// Extract the release note from a pull request body
#[derive(Debug, Args)]
pub struct NoteCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl NoteCommand {
    /// Execute the note command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let body = self.input.read()?;
        info!(len = body.len(), "executing note command");

        let note = extract_note(&body);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "note": note }));
            }
            OutputFormat::Text => match note {
                Some(note) => println!("{}", note),
                None if !cli.quiet => {
                    eprintln!("{}", style("No release note found.").yellow());
                }
                None => {}
            },
        }

        Ok(())
    }
}
