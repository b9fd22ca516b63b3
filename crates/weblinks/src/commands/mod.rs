use clap::ArgMatches;
use tracing::{error, warn};
use weblinks_config::WeblinksConfig;

mod open;
mod scan;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("scan", sub_matches)) => scan::handle_scan_command(sub_matches),
        Some(("open", sub_matches)) => open::handle_open_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the config hierarchy, falling back to defaults when it is unreadable.
pub(crate) fn load_config_with_warning() -> WeblinksConfig {
    match WeblinksConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.weblinks/config.toml and ./.weblinks/config.toml for errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            WeblinksConfig::default()
        }
    }
}
