//! Ctrl+C handling for the live monitor.
//!
//! The monitor runs in cooked terminal mode, so Ctrl+C arrives as SIGINT
//! rather than as a key event. [`SignalHandler`] turns it into a flag the
//! monitor's cancel source can check between polling slices.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{EatsError, Result};

/// Shared flag set when SIGINT is received.
///
/// Only one handler can be registered per process; clone this value to
/// share it instead of calling [`SignalHandler::install`] twice.
#[derive(Clone)]
pub struct SignalHandler {
    interrupted: Arc<AtomicBool>,
}

impl SignalHandler {
    /// Register the process-wide SIGINT handler.
    ///
    /// # Errors
    ///
    /// Returns [`EatsError::SignalHandler`] if a handler is already
    /// registered for this process.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use eats::signal::SignalHandler;
    ///
    /// let handler = SignalHandler::install()?;
    /// if handler.is_interrupted() {
    ///     println!("interrupted");
    /// }
    /// # Ok::<(), eats::EatsError>(())
    /// ```
    pub fn install() -> Result<Self> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .map_err(|e| EatsError::SignalHandler(e.to_string()))?;

        Ok(Self { interrupted })
    }

    /// Whether SIGINT has been received since the last [`SignalHandler::clear`].
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Forget a previous interrupt so the next monitor session starts clean.
    pub fn clear(&self) {
        self.interrupted.store(false, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub(crate) fn from_flag(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }
}
