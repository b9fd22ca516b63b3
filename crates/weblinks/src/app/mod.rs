use clap::{Arg, ArgAction, Command};

mod open;
mod scan;

#[cfg(test)]
mod tests;

pub fn build_cli() -> Command {
    Command::new("weblinks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find and open web links in terminal output")
        .long_about(
            "weblinks detects http and https links in terminal text using the same grammar \
             as the terminal addon, and opens them the way a click would, including the \
             loopback remapping used behind port-forwarding proxies.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(scan::subcommand())
        .subcommand(open::subcommand())
}
