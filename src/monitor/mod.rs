//! Live monitor - a polling, redraw-on-change view of any data source.
//!
//! The monitor calls a data provider on a fixed refresh interval, asks a
//! change predicate whether the new snapshot differs from the last one it
//! drew, and redraws the screen through a display callback when it does.
//! The first poll always draws.
//!
//! Between polls the interval is split into short slices; after each
//! slice the [`CancelSource`] is consulted, so a cancellation request is
//! honoured within one slice rather than one full interval.

pub mod app;
pub mod cancel;
pub mod detect;

pub use app::{MonitorOptions, MonitorSummary, PollingMonitor};
pub use cancel::{CancelHandle, CancelSource, CancelToken, ChannelCancel, TerminalCancel};
pub use detect::{content_changed, count_changed, DetectMode};
