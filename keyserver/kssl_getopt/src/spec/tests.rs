#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parses_arities() {
    let spec = ScanSpec::short_only("ab:c::").expect("valid spec");
    assert_eq!(spec.short_arity('a'), Some(Arity::None));
    assert_eq!(spec.short_arity('b'), Some(Arity::Required));
    assert_eq!(spec.short_arity('c'), Some(Arity::Optional));
    assert_eq!(spec.short_arity('d'), None);
    assert!(!spec.silent_errors());
}

#[test]
fn leading_colon_selects_silent_mode() {
    let spec = ScanSpec::short_only(":o:").expect("valid spec");
    assert!(spec.silent_errors());
    assert_eq!(spec.short_arity('o'), Some(Arity::Required));
    assert_eq!(spec.short_arity(':'), None);
}

#[test]
fn lone_colon_is_silent_and_empty() {
    let spec = ScanSpec::short_only(":").expect("valid spec");
    assert!(spec.silent_errors());
    assert_eq!(spec.short_arity('a'), None);
}

#[test]
fn empty_spec_is_valid() {
    let spec = ScanSpec::short_only("").expect("valid spec");
    assert!(!spec.silent_errors());
    assert!(spec.long_opts().is_empty());
}

#[test]
fn colon_without_option_char_is_rejected() {
    assert_eq!(
        ScanSpec::short_only("::a").unwrap_err(),
        SpecError::MissingOptionChar { position: 1 }
    );
    assert_eq!(
        ScanSpec::short_only("a:::").unwrap_err(),
        SpecError::MissingOptionChar { position: 3 }
    );
    assert_eq!(
        ScanSpec::short_only(":a::b:::").unwrap_err(),
        SpecError::MissingOptionChar { position: 7 }
    );
}

#[test]
fn duplicate_short_option_is_rejected() {
    assert_eq!(
        ScanSpec::short_only("ab:a").unwrap_err(),
        SpecError::DuplicateShortOption { option: 'a' }
    );
}

#[test]
fn empty_long_name_is_rejected() {
    let long = vec![
        LongOpt::new("ok", Arity::None, 'o'),
        LongOpt::new("", Arity::None, 'x'),
    ];
    assert_eq!(
        ScanSpec::new("", long).unwrap_err(),
        SpecError::EmptyLongName { index: 1 }
    );
}

#[test]
fn long_name_with_equals_is_rejected() {
    let long = vec![LongOpt::new("x=y", Arity::None, 'x')];
    assert_eq!(
        ScanSpec::new("", long).unwrap_err(),
        SpecError::InvalidLongName {
            name: "x=y".to_string()
        }
    );
}

#[test]
fn duplicate_long_name_is_rejected() {
    let long = vec![
        LongOpt::new("port", Arity::Required, 'p'),
        LongOpt::new("port", Arity::None, 'q'),
    ];
    assert_eq!(
        ScanSpec::new("", long).unwrap_err(),
        SpecError::DuplicateLongName {
            name: "port".to_string()
        }
    );
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        SpecError::DuplicateLongName {
            name: "port".to_string()
        }
        .to_string(),
        "long option `--port` is declared more than once"
    );
    assert_eq!(
        SpecError::MissingOptionChar { position: 0 }.to_string(),
        "':' at byte 0 of the option string has no option character before it"
    );
}

#[test]
fn flag_descriptor_reports_flag_id() {
    let cell = FlagCell::default();
    let opt = LongOpt::flag("silent", Arity::None, &cell, 7);
    assert_eq!(opt.id(), OptId::FLAG);
    assert_eq!(opt.flag_value(), Some(7));
    assert!(opt.flag_target().is_some());

    assert!(opt.store_flag());
    assert_eq!(cell.get(), 7);
}

#[test]
fn plain_descriptor_has_no_flag() {
    let opt = LongOpt::new("port", Arity::Required, 'p');
    assert_eq!(opt.id(), OptId::from('p'));
    assert_eq!(opt.flag_target().map(FlagCell::get), None);
    assert!(!opt.store_flag());
}

#[test]
fn flag_cell_clones_share_storage() {
    let cell = FlagCell::new(1);
    let other = cell.clone();
    other.set(5);
    assert_eq!(cell.get(), 5);
}

#[test]
fn arity_takes_argument() {
    assert!(!Arity::None.takes_argument());
    assert!(Arity::Required.takes_argument());
    assert!(Arity::Optional.takes_argument());
}

#[test]
fn spec_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScanSpec>();
    assert_send_sync::<FlagCell>();
}
