pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod kitchen;
pub mod monitor;
pub mod output;
pub mod record;
pub mod signal;
pub mod store;

pub use config::Config;
pub use error::{EatsError, Result};
pub use kitchen::{KitchenOrder, OrderStatus};
pub use monitor::{CancelSource, DetectMode, MonitorOptions, MonitorSummary, PollingMonitor};
pub use record::{Identified, Record};
pub use store::RecordStore;
