//! Completions command

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use tracing::info;

use crate::cli::{output, Cli};

/// Generate shell completions for relnote
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for (detected from $SHELL when omitted)
    #[arg(value_enum)]
    pub shell: Option<Shell>,

    /// Write the script into this directory under the shell's conventional name
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let shell = self
            .shell
            .or_else(Shell::from_env)
            .ok_or_else(|| {
                anyhow::anyhow!("Could not detect the shell from $SHELL, pass one explicitly")
            })?;
        info!(%shell, output = ?self.output, "executing completions command");

        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();

        match &self.output {
            Some(dir) => {
                let path = generate_to(shell, &mut cmd, bin_name, dir)?;
                if !cli.quiet {
                    output::success(&format!("Completions written to {}", path.display()));
                }
            }
            None => generate(shell, &mut cmd, bin_name, &mut std::io::stdout()),
        }

        Ok(())
    }
}
