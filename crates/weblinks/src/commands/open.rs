use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, info};
use url::Url;
use weblinks_core::{InteractionEvent, LinkHandler, SystemBrowser, WebLinkHandler};

use super::load_config_with_warning;

pub fn handle_open_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let uri = matches
        .get_one::<String>("uri")
        .ok_or("URI argument is required")?;
    let page_url = matches.get_one::<String>("page-url");

    info!(event = "cli.open_started", uri = %uri, page_url = ?page_url);

    let browser = match page_url {
        Some(raw) => {
            let location = Url::parse(raw).map_err(|e| {
                error!(event = "cli.open_failed", page_url = %raw, error = %e);
                format!("Invalid --page-url '{}': {}", raw, e)
            })?;
            SystemBrowser::new(Some(location))
        }
        None => SystemBrowser::from_config(&load_config_with_warning().remap),
    };

    let handler = WebLinkHandler::new(Arc::new(browser));
    let target = handler.resolve_target(uri).inspect_err(|e| {
        error!(event = "cli.open_failed", uri = %uri, error = %e);
    })?;

    println!("Opening {}", target);
    handler.handle(&InteractionEvent::default(), uri);

    info!(event = "cli.open_completed", uri = %uri);
    Ok(())
}
