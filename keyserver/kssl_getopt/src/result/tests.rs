use super::*;

#[test]
fn char_ids_round_trip_through_as_char() {
    let id = OptId::from('v');
    assert_eq!(id.raw(), 118);
    assert_eq!(id.as_char(), Some('v'));
    assert!(!id.is_flag());
}

#[test]
fn long_only_ids_display_as_numbers() {
    assert_eq!(OptId::new(300).to_string(), "300");
    assert_eq!(OptId::new(-1).as_char(), None);
    assert_eq!(OptId::FLAG.to_string(), "0");
    assert_eq!(OptId::from('x').to_string(), "x");
}

#[test]
fn opt_name_display() {
    assert_eq!(OptName::Short('q').to_string(), "q");
    assert_eq!(OptName::Long("verbose").to_string(), "verbose");
}

#[test]
fn classification_helpers() {
    let found = ScanResult::Option {
        id: OptId::from('o'),
        argument: Some("out"),
        long_index: None,
    };
    assert_eq!(found.id(), Some(OptId::from('o')));
    assert_eq!(found.argument(), Some("out"));
    assert!(!found.is_error());
    assert!(!found.is_terminal());

    let unknown = ScanResult::UnknownOption(OptName::Long("nope"));
    assert!(unknown.is_error());
    assert_eq!(unknown.error_name(), Some(OptName::Long("nope")));
    assert_eq!(unknown.id(), None);

    assert!(ScanResult::Done.is_terminal());
    assert!(ScanResult::NonOption.is_terminal());
    assert_eq!(ScanResult::Done.error_name(), None);
}
