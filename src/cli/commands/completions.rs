//! `walletvault completions` — generate shell completion scripts.
//!
//! Usage:
//!   walletvault completions bash > ~/.bash_completion.d/walletvault
//!   walletvault completions zsh

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "walletvault", &mut io::stdout());
    Ok(())
}
