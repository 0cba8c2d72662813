//! Watch command handler.
//!
//! Runs the live order monitor over the kitchen file until the user
//! presses Enter (or Ctrl+C).

use super::Context;
use crate::error::Result;
use crate::monitor::{DetectMode, PollingMonitor, TerminalCancel};
use crate::output::{print_info, print_warning, write_orders};
use crate::signal::SignalHandler;
use std::io;
use std::time::Duration;

const MONITOR_TITLE: &str = "KITCHEN ORDERS";

/// Launch the live order monitor.
///
/// `interval` and `detect` override the configured refresh interval and
/// change detection.
pub fn watch_command(ctx: &Context, interval: Option<u64>, detect: Option<DetectMode>) -> Result<()> {
    let store = ctx.open_store()?;

    let mut options = ctx.config.monitor_options(MONITOR_TITLE);
    if let Some(secs) = interval {
        options.refresh_interval = Duration::from_secs(secs);
    }
    let detect = detect.unwrap_or(ctx.config.detect);

    let signal = match SignalHandler::install() {
        Ok(handler) => Some(handler),
        Err(e) => {
            print_warning(&format!("{}; only Enter will stop the monitor", e));
            None
        }
    };
    let mut cancel = TerminalCancel::new(signal);

    print_info(&format!(
        "Starting live order monitoring from {} ({} change detection)",
        store.path().display(),
        detect
    ));

    let mut monitor = PollingMonitor::new(io::stdout(), options);
    monitor.run(
        || store.read_all(),
        |out, orders| Ok(write_orders(out, orders)?),
        detect.predicate(),
        &mut cancel,
    )?;
    Ok(())
}
