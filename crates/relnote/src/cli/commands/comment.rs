//! Comment command

use clap::Args;
use tracing::info;

use relnote_notes::{extract_note, format_note_comment};

use super::InputArgs;
use crate::cli::{Cli, OutputFormat};

/// Render the comment posted back to a pull request
#[derive(Debug, Args)]
pub struct CommentCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Treat the input as the note itself instead of a full PR body
    #[arg(long)]
    pub raw: bool,
}

impl CommentCommand {
    /// Execute the comment command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let text = self.input.read()?;
        info!(raw = self.raw, len = text.len(), "executing comment command");

        let note = if self.raw {
            Some(text)
        } else {
            extract_note(&text)
        };
        let comment = format_note_comment(note.as_deref());

        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "note": note, "comment": comment })
                );
            }
            OutputFormat::Text => println!("{}", comment),
        }

        Ok(())
    }
}
