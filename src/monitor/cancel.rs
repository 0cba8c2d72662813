//! Cancellation sources for the live monitor.
//!
//! A [`CancelSource`] owns the waiting between polls: the monitor hands it
//! one slice at a time and stops as soon as it reports a cancellation.

use crate::error::Result;
use crate::signal::SignalHandler;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub trait CancelSource {
    /// Block for at most `slice`, returning `true` if the monitor should stop.
    fn wait(&mut self, slice: Duration) -> Result<bool>;

    /// Short instruction shown in the monitor header.
    fn hint(&self) -> Option<&str> {
        None
    }
}

/// Stops on an Enter key press, or on Ctrl+C when a signal handler is set.
///
/// The terminal stays in cooked mode, so typed characters echo and reach
/// crossterm only once Enter is pressed.
pub struct TerminalCancel {
    signal: Option<SignalHandler>,
}

impl TerminalCancel {
    pub fn new(signal: Option<SignalHandler>) -> Self {
        Self { signal }
    }

    fn interrupted(&self) -> bool {
        self.signal.as_ref().is_some_and(|s| s.is_interrupted())
    }
}

impl CancelSource for TerminalCancel {
    fn wait(&mut self, slice: Duration) -> Result<bool> {
        let deadline = Instant::now() + slice;
        loop {
            if self.interrupted() {
                return Ok(true);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            if event::poll(deadline - now)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && key.code == KeyCode::Enter {
                        return Ok(true);
                    }
                }
            }
        }
    }

    fn hint(&self) -> Option<&str> {
        Some("Press Enter to return")
    }
}

/// Stops when a message arrives on the channel.
///
/// A disconnected sender is not a cancellation; the slice is slept out.
pub struct ChannelCancel {
    rx: Receiver<()>,
}

impl ChannelCancel {
    pub fn new(rx: Receiver<()>) -> Self {
        Self { rx }
    }
}

impl CancelSource for ChannelCancel {
    fn wait(&mut self, slice: Duration) -> Result<bool> {
        match self.rx.recv_timeout(slice) {
            Ok(()) => Ok(true),
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(slice);
                Ok(false)
            }
        }
    }
}

/// A flag that can be tripped from any thread through a [`CancelHandle`].
#[derive(Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            flag: Arc::clone(&self.flag),
        }
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl CancelSource for CancelToken {
    fn wait(&mut self, slice: Duration) -> Result<bool> {
        if self.flag.load(Ordering::SeqCst) {
            return Ok(true);
        }
        thread::sleep(slice);
        Ok(self.flag.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_token_reports_cancel_without_sleeping() {
        let mut token = CancelToken::new();
        token.handle().cancel();

        let started = Instant::now();
        assert!(token.wait(Duration::from_secs(5)).unwrap());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_token_times_out_when_not_cancelled() {
        let mut token = CancelToken::new();
        assert!(!token.wait(Duration::from_millis(5)).unwrap());
        assert!(!token.handle().is_cancelled());
    }

    #[test]
    fn test_token_cancelled_from_other_thread() {
        let mut token = CancelToken::new();
        let handle = token.handle();
        thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(token.wait(Duration::from_millis(1)).unwrap());
    }

    #[test]
    fn test_channel_message_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut cancel = ChannelCancel::new(rx);
        tx.send(()).unwrap();
        assert!(cancel.wait(Duration::from_millis(50)).unwrap());
    }

    #[test]
    fn test_channel_timeout_keeps_running() {
        let (_tx, rx) = mpsc::channel();
        let mut cancel = ChannelCancel::new(rx);
        assert!(!cancel.wait(Duration::from_millis(5)).unwrap());
    }

    #[test]
    fn test_channel_disconnect_is_not_cancel() {
        let (tx, rx) = mpsc::channel::<()>();
        drop(tx);
        let mut cancel = ChannelCancel::new(rx);
        assert!(!cancel.wait(Duration::from_millis(5)).unwrap());
    }

    #[test]
    fn test_terminal_cancel_honours_interrupt_before_polling() {
        let signal = SignalHandler::from_flag(Arc::new(AtomicBool::new(true)));
        let mut cancel = TerminalCancel::new(Some(signal));
        assert!(cancel.wait(Duration::from_secs(5)).unwrap());
    }

    #[test]
    fn test_only_terminal_cancel_has_hint() {
        assert!(TerminalCancel::new(None).hint().is_some());
        assert!(CancelToken::new().hint().is_none());
    }
}
