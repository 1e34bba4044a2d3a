use super::*;

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_is_idle() {
    assert_eq!(SessionState::default(), SessionState::Idle);
}

#[test]
fn only_drawing_is_drawing() {
    assert!(!SessionState::Idle.is_drawing());
    assert!(!SessionState::Pressing.is_drawing());
    assert!(SessionState::Drawing.is_drawing());
}

#[test]
fn session_debug_format() {
    assert_eq!(format!("{:?}", SessionState::Pressing), "Pressing");
}
