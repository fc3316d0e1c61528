#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn config(args: &[&str]) -> Config {
    Config::from_args(args).expect("valid invocation")
}

#[test]
fn options_flag_and_parameters() {
    let config = config(&["kssl-getopt", "-o", "vp:", "--", "-v", "file"]);
    assert_eq!(config.short_opts, "vp:");
    assert_eq!(config.name, "kssl-getopt");
    assert_eq!(config.params, vec!["-v".to_string(), "file".to_string()]);
    assert!(!config.quiet);
    assert!(!config.help);
}

#[test]
fn first_operand_is_optstring_without_dash_o() {
    let config = config(&["/usr/bin/kssl-getopt", "ab:", "-a", "-b", "x"]);
    assert_eq!(config.short_opts, "ab:");
    assert_eq!(config.name, "kssl-getopt");
    assert_eq!(config.params, vec!["-a", "-b", "x"]);
}

#[test]
fn long_options_accumulate_across_flags() {
    let config = config(&[
        "kssl-getopt",
        "-l",
        "verbose,port:",
        "--longoptions=color::",
        "-o",
        "",
        "--",
    ]);
    assert_eq!(
        config.long_opts,
        vec![
            ("verbose".to_string(), Arity::None),
            ("port".to_string(), Arity::Required),
            ("color".to_string(), Arity::Optional),
        ]
    );
    assert!(config.params.is_empty());
}

#[test]
fn name_and_quiet() {
    let short = config(&["kssl-getopt", "-qn", "kssl_server", "-o", "a", "--"]);
    assert!(short.quiet);
    assert_eq!(short.name, "kssl_server");

    let long = config(&["kssl-getopt", "--quiet", "--name=tester", "a"]);
    assert!(long.quiet);
    assert_eq!(long.name, "tester");
    assert_eq!(long.short_opts, "a");
}

#[test]
fn help_does_not_need_optstring() {
    let config = config(&["kssl-getopt", "--help"]);
    assert!(config.help);
    assert_eq!(config.short_opts, "");
}

#[test]
fn missing_optstring_is_a_usage_error() {
    let err = Config::from_args(&["kssl-getopt", "-q"]).unwrap_err();
    assert_eq!(err.to_string(), "missing optstring argument");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn own_option_errors_are_usage_errors() {
    let err = Config::from_args(&["kssl-getopt", "-x", "ab"]).unwrap_err();
    assert_eq!(err.to_string(), "illegal option -- x");

    let err = Config::from_args(&["kssl-getopt", "--options"]).unwrap_err();
    assert_eq!(err.to_string(), "option requires an argument -- options");
}

#[test]
fn long_option_list_parsing() {
    assert_eq!(
        parse_long_options("a,,b:,c::"),
        vec![
            ("a".to_string(), Arity::None),
            ("b".to_string(), Arity::Required),
            ("c".to_string(), Arity::Optional),
        ]
    );
    assert!(parse_long_options("").is_empty());
}
