//! eats CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::Parser;
use eats::cli::{Cli, Commands};
use eats::commands::{
    add_command, clear_command, completions_command, config_command, list_command,
    next_id_command, status_command, watch_command, Context,
};
use eats::output::print_error;
use eats::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completion scripts must not create a config file as a side effect.
    if let Commands::Completions { shell } = cli.command {
        return completions_command(shell);
    }

    let ctx = Context::load(cli.config, cli.file)?;

    match cli.command {
        Commands::Watch { interval, detect } => watch_command(&ctx, interval, detect),
        Commands::List { json } => list_command(&ctx, json),
        Commands::Add {
            table,
            items,
            status,
        } => add_command(&ctx, table, &items, &status),
        Commands::Status { id, status } => status_command(&ctx, id, &status),
        Commands::NextId => next_id_command(&ctx),
        Commands::Clear => clear_command(&ctx),
        Commands::Config { action } => config_command(&ctx, action),
        Commands::Completions { .. } => unreachable!("handled before loading config"),
    }
}
