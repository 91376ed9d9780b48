use super::*;

fn user(role: UserRole) -> User {
    User { name: "Ada".to_owned(), email: "ada@example.com".to_owned(), role }
}

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn sign_in_then_out() {
    let mut state = AuthState::default();
    state.sign_in(user(UserRole::Investor));
    assert!(state.is_signed_in());
    state.sign_out();
    assert!(!state.is_signed_in());
}

#[test]
fn only_entrepreneurs_manage_campaigns() {
    let mut state = AuthState::default();
    assert!(!state.can_manage_campaigns());
    state.sign_in(user(UserRole::Investor));
    assert!(!state.can_manage_campaigns());
    state.sign_in(user(UserRole::Entrepreneur));
    assert!(state.can_manage_campaigns());
}

#[test]
fn user_role_parses_form_values() {
    assert_eq!(UserRole::parse("entrepreneur"), Some(UserRole::Entrepreneur));
    assert_eq!(UserRole::parse(UserRole::Investor.as_str()), Some(UserRole::Investor));
    assert_eq!(UserRole::parse("admin"), None);
    assert_eq!(UserRole::default(), UserRole::Investor);
}
