use super::build_cli;

#[test]
fn test_cli_builds_successfully() {
    let app = build_cli();
    app.debug_assert();
}

#[test]
fn test_scan_defaults() {
    let matches = build_cli()
        .try_get_matches_from(["weblinks", "scan"])
        .unwrap();
    let sub = matches.subcommand_matches("scan").unwrap();

    assert!(sub.get_one::<String>("file").is_none());
    assert!(!sub.get_flag("json"));
    assert!(sub.get_one::<String>("url-regex").is_none());
    assert!(!matches.get_flag("verbose"));
}

#[test]
fn test_scan_with_all_args() {
    let matches = build_cli()
        .try_get_matches_from([
            "weblinks",
            "scan",
            "build.log",
            "--json",
            "--url-regex",
            r"<(\S+)>",
            "-v",
        ])
        .unwrap();
    let sub = matches.subcommand_matches("scan").unwrap();

    assert_eq!(sub.get_one::<String>("file").unwrap(), "build.log");
    assert!(sub.get_flag("json"));
    assert_eq!(sub.get_one::<String>("url-regex").unwrap(), r"<(\S+)>");
    assert!(matches.get_flag("verbose"));
}

#[test]
fn test_open_requires_uri() {
    let result = build_cli().try_get_matches_from(["weblinks", "open"]);
    assert!(result.is_err());
}

#[test]
fn test_open_with_page_url() {
    let matches = build_cli()
        .try_get_matches_from([
            "weblinks",
            "open",
            "http://localhost:3000/",
            "--page-url",
            "https://8080-ws.example.dev/",
        ])
        .unwrap();
    let sub = matches.subcommand_matches("open").unwrap();

    assert_eq!(sub.get_one::<String>("uri").unwrap(), "http://localhost:3000/");
    assert_eq!(
        sub.get_one::<String>("page-url").unwrap(),
        "https://8080-ws.example.dev/"
    );
}

#[test]
fn test_subcommand_required() {
    let result = build_cli().try_get_matches_from(["weblinks"]);
    assert!(result.is_err());
}
