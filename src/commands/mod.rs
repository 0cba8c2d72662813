//! CLI command handlers for eats.
//!
//! # Commands
//!
//! - [`watch`] - Live order monitor
//! - [`orders`] - List, add, update and clear kitchen orders
//! - [`config`] - Show or reset configuration
//! - [`completions`] - Shell completion scripts

mod completions;
mod config;
mod orders;
mod watch;

pub use completions::completions_command;
pub use config::config_command;
pub use orders::{
    add_command, add_order, clear_command, list_command, next_id_command, parse_item,
    status_command, update_status,
};
pub use watch::watch_command;

use crate::config::{default_config_path, load_config, Config};
use crate::error::Result;
use crate::kitchen::KitchenOrder;
use crate::store::RecordStore;
use std::path::PathBuf;

/// Resolved configuration shared by the command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
}

impl Context {
    /// Load the config (creating it on first use) and apply a `--file`
    /// override.
    pub fn load(config_path: Option<PathBuf>, file: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let mut config = load_config(&config_path)?;
        if let Some(file) = file {
            config.orders_file = file;
        }
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Open the kitchen order file named by the configuration.
    pub fn open_store(&self) -> Result<RecordStore<KitchenOrder>> {
        RecordStore::open(&self.config.orders_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_file_override() {
        let dir = TempDir::new().unwrap();
        let orders = dir.path().join("orders.txt");

        let ctx = Context::load(Some(dir.path().join("config.toml")), Some(orders.clone()))
            .unwrap();

        assert_eq!(ctx.config.orders_file, orders);
        let store = ctx.open_store().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_context_uses_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "refresh_interval_secs = 9\n").unwrap();

        let ctx = Context::load(Some(config_path.clone()), None).unwrap();

        assert_eq!(ctx.config_path, config_path);
        assert_eq!(ctx.config.refresh_interval_secs, 9);
    }
}
