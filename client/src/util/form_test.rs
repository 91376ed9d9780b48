use super::*;

#[test]
fn parse_amount_accepts_plain_and_formatted_values() {
    assert_eq!(parse_amount("2500"), Some(2_500));
    assert_eq!(parse_amount(" $1,250,000 "), Some(1_250_000));
    assert_eq!(parse_amount("0"), Some(0));
}

#[test]
fn parse_amount_rejects_non_whole_dollars() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("$"), None);
    assert_eq!(parse_amount("12.50"), None);
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount("ten"), None);
}

#[test]
fn plausible_email_shapes() {
    assert!(is_plausible_email("founder@example.com"));
    assert!(is_plausible_email("a@b.co"));
    assert!(!is_plausible_email("founder.example.com"));
    assert!(!is_plausible_email("@example.com"));
    assert!(!is_plausible_email("a@localhost"));
    assert!(!is_plausible_email("a@b@c.com"));
    assert!(!is_plausible_email("a@example."));
}

#[test]
fn field_trims_whitespace() {
    assert_eq!(field("  Solar  "), "Solar");
}
