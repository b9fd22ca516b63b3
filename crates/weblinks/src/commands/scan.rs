use std::io::Read;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};
use weblinks_config::WeblinksConfig;
use weblinks_core::{AddonOptions, CompositePattern, find_links};

use super::load_config_with_warning;

/// A link found while scanning, positioned for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ScanResult {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column of the first URI character.
    pub column: usize,
    pub uri: String,
}

pub fn handle_scan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let file = matches.get_one::<String>("file");
    let url_regex = matches.get_one::<String>("url-regex");

    info!(
        event = "cli.scan_started",
        file = ?file,
        json_output = json_output,
        custom_pattern = url_regex.is_some()
    );

    let config = load_config_with_warning();
    let pattern = select_pattern(url_regex.map(String::as_str), &config).inspect_err(|e| {
        error!(event = "cli.scan_failed", error = %e);
    })?;

    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            error!(event = "cli.scan_failed", file = %path, error = %e);
            format!("Failed to read '{}': {}", path, e)
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let results = scan_text(&pattern, &text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No links found.");
    } else {
        for result in &results {
            println!("{}:{}  {}", result.line, result.column, result.uri);
        }
    }

    info!(event = "cli.scan_completed", count = results.len());
    Ok(())
}

/// `--url-regex` wins, then a configured provider pattern, then the built-in grammar.
fn select_pattern(
    url_regex: Option<&str>,
    config: &WeblinksConfig,
) -> Result<CompositePattern, Box<dyn std::error::Error>> {
    if let Some(source) = url_regex {
        return Ok(CompositePattern::from_source(source)?);
    }

    let options = AddonOptions::from_config(config)?;
    match options.url_regex {
        Some(pattern) if options.use_link_provider => Ok(pattern),
        _ => Ok(CompositePattern::web_links()),
    }
}

fn scan_text(pattern: &CompositePattern, text: &str) -> Vec<ScanResult> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            find_links(pattern, line)
                .into_iter()
                .map(move |link| ScanResult {
                    line: index + 1,
                    column: line[..link.uri_offset].chars().count() + 1,
                    uri: link.uri,
                })
        })
        .collect()
}
