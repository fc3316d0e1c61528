#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use kssl_getopt::OptId;
use pretty_assertions::assert_eq;

#[test]
fn progname_strips_directories() {
    assert_eq!(progname("/usr/local/bin/kssl_server"), "kssl_server");
    assert_eq!(progname("./testclient"), "testclient");
    assert_eq!(progname("keyserver"), "keyserver");
    assert_eq!(progname("trailing/"), "");
    assert_eq!(progname(""), "");
}

#[test]
fn unknown_short_option_text() {
    let result = ScanResult::UnknownOption(OptName::Short('x'));
    let diagnostic = ScanDiagnostic::from_result(&result).expect("error result");
    assert_eq!(diagnostic.kind(), DiagnosticKind::IllegalOption);
    assert_eq!(diagnostic.to_string(), "illegal option -- x");
}

#[test]
fn missing_long_argument_text() {
    let result = ScanResult::MissingArgument(OptName::Long("port"));
    let diagnostic = ScanDiagnostic::from_result(&result).expect("error result");
    assert_eq!(diagnostic.kind(), DiagnosticKind::MissingArgument);
    assert_eq!(diagnostic.option(), OptName::Long("port"));
    assert_eq!(diagnostic.to_string(), "option requires an argument -- port");
}

#[test]
fn non_errors_have_no_diagnostic() {
    let found = ScanResult::Option {
        id: OptId::from('v'),
        argument: None,
        long_index: None,
    };
    assert_eq!(ScanDiagnostic::from_result(&found), None);
    assert_eq!(ScanDiagnostic::from_result(&ScanResult::Done), None);
    assert_eq!(ScanDiagnostic::from_result(&ScanResult::NonOption), None);
}
