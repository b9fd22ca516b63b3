use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("scan")
        .about("List the links found in a file or stdin")
        .arg(
            Arg::new("file")
                .help("File to scan (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("url-regex")
                .long("url-regex")
                .help("Custom pattern; capture group 1 is taken as the link"),
        )
}
