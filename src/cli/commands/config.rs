use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::config::Config;

use super::CommandDefinition;

const USAGE: &str = "config [show|set <currency|target|endpoint|timeout> <value>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View and change conversion settings",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show_config(context),
        ["set", key, value] => {
            context.config.set(key, value)?;
            context.persist_config()?;
            io::print_success(format!("Updated `{key}`."));
            Ok(())
        }
        ["set", ..] => Err(CommandError::InvalidArguments(format!(
            "Usage: config set <{}> <value>",
            Config::KEYS.join("|")
        ))),
        _ => Err(CommandError::InvalidArguments(format!("Usage: {USAGE}"))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    output_section("Configuration");
    io::print_info(format!("  File      : {}", context.config_path()));
    io::print_info(format!("  Currency  : {}", config.currency));
    io::print_info(format!("  Target    : {}", config.target_currency));
    io::print_info(format!("  Endpoint  : {}", config.rate_endpoint));
    io::print_info(format!("  Timeout   : {}s", config.rate_timeout_secs));
    Ok(())
}
