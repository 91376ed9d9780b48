use super::*;

#[test]
fn theme_values_round_trip() {
    assert_eq!(parse_theme_value(theme_value(true)), Some(true));
    assert_eq!(parse_theme_value(theme_value(false)), Some(false));
}

#[test]
fn unknown_theme_value_is_unset() {
    assert_eq!(parse_theme_value("true"), None);
    assert_eq!(parse_theme_value(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
