use super::*;

fn session() -> Session {
    Session {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        member_id: 1,
        team_id: 2,
        team_name: "forest".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_initializing() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn auth_state_default_has_no_identity() {
    let state = AuthState::default();
    assert!(state.member_id.is_none());
    assert!(state.team_id.is_none());
    assert!(state.team_name.is_none());
}

// =============================================================
// Resolved states
// =============================================================

#[test]
fn anonymous_is_resolved_and_empty() {
    let state = AuthState::anonymous();
    assert!(!state.is_authenticated);
    assert!(!state.loading);
    assert!(state.member_id.is_none());
    assert!(state.error.is_none());
}

#[test]
fn authenticated_carries_session_identity() {
    let state = AuthState::authenticated(&session());
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.member_id, Some(1));
    assert_eq!(state.team_id, Some(2));
    assert_eq!(state.team_name.as_deref(), Some("forest"));
    assert!(state.error.is_none());
}
