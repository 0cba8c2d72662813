//! Effective configuration display.

use crate::config::Config;
use std::path::Path;

use super::colors::*;

/// Print the configuration together with the file it was loaded from.
pub fn print_config(path: &Path, config: &Config) {
    println!("{BOLD}Configuration{RESET} {GRAY}({}){RESET}", path.display());
    println!();
    println!(
        "{BLUE}orders_file:{RESET}           {}",
        config.orders_file.display()
    );
    println!(
        "{BLUE}refresh_interval_secs:{RESET} {}",
        config.refresh_interval_secs
    );
    println!("{BLUE}poll_slice_ms:{RESET}         {}", config.poll_slice_ms);
    println!("{BLUE}detect:{RESET}                {}", config.detect);
}
