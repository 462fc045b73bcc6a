//! `completions` command: prints a shell completion script to stdout.

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

const BIN_NAME: &str = "hostel";

/// Generate shell completion scripts.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Where the generated script is usually installed, if there is a
    /// conventional location.
    fn install_hint(&self) -> Option<&'static str> {
        match self.shell {
            Shell::Bash => Some("hostel completions bash > ~/.local/share/bash-completion/completions/hostel"),
            Shell::Zsh => Some("hostel completions zsh > ~/.zsh/completions/_hostel"),
            Shell::Fish => Some("hostel completions fish > ~/.config/fish/completions/hostel.fish"),
            Shell::PowerShell => {
                Some("hostel completions powershell | Out-String | Invoke-Expression")
            }
            _ => None,
        }
    }

    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = self.install_hint() {
                eprintln!("# To enable {} completions:\n#   {hint}\n", self.shell);
            }
        }

        generate(self.shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
