//! Config command handler.

use super::Context;
use crate::cli::ConfigAction;
use crate::config::{save_config, Config};
use crate::error::Result;
use crate::output::{print_config, print_success};

/// Show the effective configuration, or reset the config file to defaults.
pub fn config_command(ctx: &Context, action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => print_config(&ctx.config_path, &ctx.config),
        ConfigAction::Reset => {
            save_config(&ctx.config_path, &Config::default())?;
            print_success(&format!(
                "Configuration reset to defaults ({})",
                ctx.config_path.display()
            ));
        }
    }
    Ok(())
}
