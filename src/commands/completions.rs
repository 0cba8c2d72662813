//! Completions command handler.

use crate::completion::{detect_shell, write_completion_script};
use crate::error::Result;
use clap_complete::Shell;
use std::io;

/// Print the completion script for `shell`, or for the shell in `$SHELL`.
pub fn completions_command(shell: Option<Shell>) -> Result<()> {
    let shell = match shell {
        Some(shell) => shell,
        None => detect_shell()?,
    };
    write_completion_script(shell, &mut io::stdout());
    Ok(())
}
