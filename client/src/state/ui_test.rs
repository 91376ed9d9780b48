use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
}

#[test]
fn close_nav_collapses_drawer() {
    let mut state = UiState { nav_open: true, ..UiState::default() };
    state.close_nav();
    assert!(!state.nav_open);
}
