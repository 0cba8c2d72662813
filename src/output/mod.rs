//! Terminal output formatting for eats.
//!
//! - [`messages`] - Error, warning, info and success messages
//! - [`orders`] - Kitchen order tables
//! - [`settings`] - Effective configuration display

pub mod messages;
pub mod orders;
pub mod settings;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use messages::{print_error, print_info, print_success, print_warning};
pub use orders::{print_orders, status_color, write_orders};
pub use settings::print_config;
