use clap::{Arg, Command};

pub fn subcommand() -> Command {
    Command::new("open")
        .about("Open a link the way a terminal click would")
        .arg(
            Arg::new("uri")
                .help("Link to open")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("page-url")
                .long("page-url")
                .help("Location of the hosting page, used to remap loopback links"),
        )
}
