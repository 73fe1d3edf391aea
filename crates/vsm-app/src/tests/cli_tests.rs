use clap::Parser;

use crate::cli::{Cli, Command};
use crate::profile::load_config;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("vsm-lookup").chain(args.iter().copied())).unwrap()
}

#[test]
fn dict_infos_without_ids_has_no_filter() {
    let cli = parse(&["dict-infos"]);

    assert!(cli.command.query_options().filter.is_none());
}

#[test]
fn entries_arguments_become_query_options() {
    let cli = parse(&[
        "entries",
        "--id",
        "https://www.ebi.ac.uk/complexportal/complex/CPX-200",
        "--id",
        "CPX-20",
        "--sort",
        "str",
        "--page",
        "2",
        "--per-page",
        "3",
    ]);

    let options = cli.command.query_options();
    assert_eq!(
        options.filter_ids().unwrap(),
        ["https://www.ebi.ac.uk/complexportal/complex/CPX-200", "CPX-20"]
    );
    assert_eq!(options.filter_dict_ids(), None);
    assert_eq!(options.sort.as_deref(), Some("str"));
    assert_eq!(options.page, Some(2));
    assert_eq!(options.per_page, Some(3));
}

#[test]
fn match_takes_search_string_and_dict_ids() {
    let cli = parse(&["match", "tp53", "--dict-id", "https://www.ebi.ac.uk/complexportal", "--page", "-1"]);

    let Command::Match { search, .. } = &cli.command else {
        panic!("expected match command");
    };
    assert_eq!(search, "tp53");

    let options = cli.command.query_options();
    assert_eq!(options.filter_dict_ids().unwrap(), ["https://www.ebi.ac.uk/complexportal"]);
    assert_eq!(options.page, Some(-1));
}

#[test]
fn global_flags_override_config() {
    let cli = parse(&["--base-url", "http://localhost:9999/", "--log", "dict-infos"]);

    let config = load_config(&cli).unwrap();
    assert_eq!(config.complex_portal.base_url, "http://localhost:9999/");
    assert_eq!(config.complex_portal.normalized_base_url(), "http://localhost:9999");
    assert!(config.complex_portal.log);
}

#[test]
fn missing_config_file_is_an_error() {
    let cli = parse(&["--config", "/nonexistent/vsm-lookup.json", "dict-infos"]);

    assert!(load_config(&cli).is_err());
}
