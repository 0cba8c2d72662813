//! Command-line definition shared by the binary and completion generation.

use crate::monitor::DetectMode;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eats")]
#[command(
    version,
    about = "Kitchen order file tools and live order monitor for Eats & Treats",
    after_help = "EXAMPLES:
    # Watch the kitchen order file (Enter returns)
    eats watch
    eats watch --interval 2 --detect content

    # Add an order for table 4
    eats add --table 4 --item \"Pad Thai x2\" --item \"Thai Iced Tea\"

    # Move order 3 along; finished orders leave the kitchen file
    eats status 3 in-progress
    eats status 3 ready"
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/eats/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Kitchen order file (overrides `orders_file` from the config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Live view of the kitchen order file, redrawn when it changes
    Watch {
        /// Seconds between two reads of the file
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Change detection: `count` (number of orders) or `content` (any field)
        #[arg(short, long)]
        detect: Option<DetectMode>,
    },

    /// Print the orders currently in the kitchen file
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Append a new order with the next free id
    Add {
        /// Table the order belongs to
        #[arg(short, long)]
        table: u32,

        /// Item as "<name> x<quantity>" (quantity defaults to 1); repeatable
        #[arg(short, long = "item", required = true, value_name = "ITEM")]
        items: Vec<String>,

        /// Initial status (pending or in-progress)
        #[arg(short, long, default_value = "Pending")]
        status: String,
    },

    /// Change an order's status and rewrite the file with the active orders
    Status {
        /// Order id
        id: u32,

        /// New status (pending, in-progress, ready, served, completed, cancelled)
        status: String,
    },

    /// Print the id the next added order will get
    NextId,

    /// Remove every order from the kitchen file
    Clear,

    /// Show or reset the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Print a shell completion script (shell detected from $SHELL if omitted)
    Completions {
        shell: Option<Shell>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective configuration (default)
    Show,
    /// Overwrite the config file with default values
    Reset,
}
