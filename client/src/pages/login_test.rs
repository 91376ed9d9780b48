use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(validate_login_input("  user@example.com ", "secret"), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("not-an-email", "secret"), Err("Enter a valid email address."));
}

#[test]
fn display_name_title_cases_local_part() {
    assert_eq!(display_name_from_email("jane.doe@example.com"), "Jane Doe");
    assert_eq!(display_name_from_email("sam_o-neil@example.com"), "Sam O Neil");
    assert_eq!(display_name_from_email("ada@example.com"), "Ada");
}

#[test]
fn display_name_handles_degenerate_input() {
    assert_eq!(display_name_from_email("@example.com"), "");
    assert_eq!(display_name_from_email("..x@example.com"), "X");
}
