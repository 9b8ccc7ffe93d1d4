use super::*;

#[test]
fn test_quote_plain() {
    assert_eq!(quote("Germany"), "'Germany'");
    assert_eq!(quote(""), "''");
    assert_eq!(quote("Россия"), "'Россия'");
}

#[test]
fn test_quote_apostrophe() {
    assert_eq!(quote("Côte d'Ivoire"), r"'Côte d\'Ivoire'");
}

#[test]
fn test_quote_backslash_before_quote() {
    // The backslash must be escaped first or the quote escape would be undone
    assert_eq!(quote(r"a\'b"), r"'a\\\'b'");
}

#[test]
fn test_quote_control_and_line_terminators() {
    assert_eq!(quote("a\nb"), r"'a\nb'");
    assert_eq!(quote("a\r\tb"), r"'a\r\tb'");
    assert_eq!(quote("a\u{0}b"), r"'a\u0000b'");
    assert_eq!(quote("a\u{1b}b"), r"'a\u001bb'");
    assert_eq!(quote("a\u{2028}b\u{2029}"), r"'a\u2028b\u2029'");
}

#[test]
fn test_quote_leaves_double_quotes() {
    assert_eq!(quote("\"Les\" États-Unis"), "'\"Les\" États-Unis'");
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("DE"));
    assert!(is_identifier("_x1"));
    assert!(is_identifier("$"));
    assert!(is_identifier("in"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1A"));
    assert!(!is_identifier("A-B"));
    assert!(!is_identifier("ÅX"));
}

#[test]
fn test_property_key() {
    assert_eq!(property_key("FR"), "FR");
    assert_eq!(property_key("Côte d'Ivoire"), r"'Côte d\'Ivoire'");
    assert_eq!(property_key("01"), "'01'");
}
