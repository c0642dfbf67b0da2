//! Completions command.

use clap::CommandFactory;
use std::io::Write;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Print the completion script for `shell`.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout())
}

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, bin, out);
    Ok(())
}
