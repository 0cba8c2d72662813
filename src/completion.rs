//! Shell completion scripts for eats.
//!
//! Scripts are generated from the same clap definition the binary parses,
//! so they never drift from the real command line.

use crate::cli::Cli;
use crate::error::{EatsError, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;
use std::path::Path;

/// Detect the user's shell from the `$SHELL` environment variable.
///
/// # Errors
///
/// Returns [`EatsError::ShellCompletion`] when `$SHELL` is unset or names
/// a shell clap_complete cannot generate for.
pub fn detect_shell() -> Result<Shell> {
    let shell_path = std::env::var("SHELL").map_err(|_| {
        EatsError::ShellCompletion(
            "$SHELL environment variable is not set. \
             Pass the shell explicitly, e.g. `eats completions zsh`."
                .to_string(),
        )
    })?;

    parse_shell_from_path(&shell_path)
}

/// Parse a shell from a path such as `/bin/zsh` or `/usr/local/bin/fish`.
pub fn parse_shell_from_path(shell_path: &str) -> Result<Shell> {
    let shell_name = Path::new(shell_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(shell_path);

    match shell_name {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "elvish" => Ok(Shell::Elvish),
        "pwsh" | "powershell" => Ok(Shell::PowerShell),
        _ => Err(EatsError::ShellCompletion(format!(
            "Unsupported shell: '{}'. \
             Supported shells are: bash, zsh, fish, elvish, powershell.",
            shell_name
        ))),
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completion_script<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "eats", out);
}
