use super::*;

#[test]
fn ui_state_defaults_to_closed_sidebar() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
}
