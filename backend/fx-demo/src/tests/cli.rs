use crate::Cli;
use crate::cli::parse_header;

use clap::Parser;
use fx_core::HeaderValue;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn given_no_arguments_when_parsed_then_defaults_apply() {
    let cli = Cli::try_parse_from(["fx-demo"]).unwrap();

    assert_that!(cli.subscribers, eq(2));
    assert_that!(cli.limit, eq(None::<u64>));
    assert!(cli.headers.is_empty());
    assert_eq!(cli.payloads, vec!["greeting"]);
    assert!(!cli.pretty);
}

#[test]
fn given_full_arguments_when_parsed_then_all_captured() {
    // Given
    let args = [
        "fx-demo",
        "--subscribers",
        "3",
        "--limit",
        "1",
        "--header",
        "foo=bar",
        "--header",
        "status=202",
        "1",
        "2",
    ];

    // When
    let cli = Cli::try_parse_from(args).unwrap();

    // Then
    assert_that!(cli.subscribers, eq(3));
    assert_that!(cli.limit, eq(Some(1)));
    assert_eq!(cli.payloads, vec!["1", "2"]);
    assert_eq!(
        cli.headers,
        vec![
            ("foo".to_string(), HeaderValue::from("bar")),
            ("status".to_string(), HeaderValue::from(202)),
        ]
    );
}

#[test]
fn given_zero_limit_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["fx-demo", "--limit", "0"]);

    assert!(result.is_err());
}

#[test]
fn given_zero_subscribers_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["fx-demo", "--subscribers", "0"]);

    assert!(result.is_err());
}

#[test]
fn given_header_without_equals_when_parsed_then_error() {
    let result = parse_header("no-separator");

    assert_that!(result, err(anything()));
}

#[test]
fn given_header_with_blank_name_when_parsed_then_error() {
    assert_that!(parse_header(" =value"), err(anything()));
}

#[test]
fn given_header_value_with_equals_when_parsed_then_split_on_first() {
    let (name, value) = parse_header("query=a=b").unwrap();

    assert_eq!(name, "query");
    assert_eq!(value, HeaderValue::from("a=b"));
}

#[test]
fn given_json_header_value_when_parsed_then_kept_as_json() {
    let (_, value) = parse_header("enabled=true").unwrap();

    assert_eq!(value, HeaderValue::Bool(true));
}
