use super::*;

#[test]
fn alerts_state_defaults_to_no_alert() {
    let state = AlertsState::default();
    assert!(state.current.is_none());
}

#[test]
fn show_replaces_current_alert() {
    let mut state = AlertsState::default();
    state.show(AlertKind::Success, "¡Registrado!", "Se ha guardado correctamente.", Some(2000));
    state.show(AlertKind::Error, "Error", "Hubo un problema de conexión.", None);

    let current = state.current.expect("alert visible");
    assert_eq!(current.kind, AlertKind::Error);
    assert_eq!(current.title, "Error");
    assert_eq!(current.timeout_ms, None);
}

#[test]
fn dismiss_with_matching_seq_clears_alert() {
    let mut state = AlertsState::default();
    let seq = state.show(AlertKind::Info, "Aviso", "Cuerpo", Some(1500));
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn dismiss_with_stale_seq_keeps_newer_alert() {
    let mut state = AlertsState::default();
    let first = state.show(AlertKind::Success, "¡Eliminado!", "El producto ha sido borrado.", Some(1500));
    state.show(AlertKind::Error, "Error", "Problema al eliminar.", None);

    // The first alert's timer fires after it was replaced.
    state.dismiss(first);
    let current = state.current.expect("newer alert survives");
    assert_eq!(current.title, "Error");
}

#[test]
fn seqs_are_monotonic() {
    let mut state = AlertsState::default();
    let a = state.show(AlertKind::Info, "a", "a", None);
    let b = state.show(AlertKind::Info, "b", "b", None);
    assert!(b > a);
}

#[test]
fn dismiss_current_clears_unconditionally() {
    let mut state = AlertsState::default();
    state.show(AlertKind::Warning, "¿Cerrar sesión?", "", None);
    state.dismiss_current();
    assert!(state.current.is_none());
}
