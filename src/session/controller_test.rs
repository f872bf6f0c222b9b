use futures::executor::block_on;

use super::*;
use crate::session::store::MemoryStorage;

struct SucceedingAuth(LoginResponse);

impl AuthExchange for SucceedingAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Ok(self.0.clone())
    }
}

struct RejectingAuth(ApiError);

impl AuthExchange for RejectingAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Err(self.0.clone())
    }
}

fn controller() -> SessionController<MemoryStorage> {
    SessionController::new(SessionStore::new(MemoryStorage::default()))
}

fn request() -> LoginRequest {
    LoginRequest {
        team_name: "forest".to_owned(),
        password: "pw".to_owned(),
    }
}

fn response() -> LoginResponse {
    LoginResponse {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        member_id: 1,
        team_id: 2,
        team_name: "X".to_owned(),
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn starts_in_loading_state() {
    let ctl = controller();
    assert!(ctl.state().loading);
    assert!(!ctl.state().is_authenticated);
}

#[test]
fn initialize_resolves_empty_store_to_anonymous() {
    let mut ctl = controller();
    ctl.initialize();
    assert_eq!(*ctl.state(), AuthState::anonymous());
}

#[test]
fn initialize_resolves_stored_session_to_authenticated() {
    let mut ctl = controller();
    ctl.store().write(&Session {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        member_id: 5,
        team_id: 9,
        team_name: "bamboo".to_owned(),
    });
    ctl.initialize();

    assert!(ctl.state().is_authenticated);
    assert!(!ctl.state().loading);
    assert_eq!(ctl.state().member_id, Some(5));
    assert_eq!(ctl.state().team_name.as_deref(), Some("bamboo"));
}

// =============================================================
// Login success
// =============================================================

#[test]
fn login_success_projects_identity_and_persists() {
    let mut ctl = controller();
    ctl.initialize();

    let result = block_on(ctl.login(&SucceedingAuth(response()), request()));
    assert!(result.is_ok());

    let expected = AuthState {
        is_authenticated: true,
        member_id: Some(1),
        team_id: Some(2),
        team_name: Some("X".to_owned()),
        loading: false,
        error: None,
    };
    assert_eq!(*ctl.state(), expected);

    let stored = ctl.store().read().expect("session persisted");
    assert_eq!(stored.access_token, "a");
    assert_eq!(stored.refresh_token, "r");
    assert_eq!(stored.team_name, "X");
}

#[test]
fn login_success_clears_stale_error() {
    let mut ctl = controller();
    ctl.initialize();
    let _ = block_on(ctl.login(&RejectingAuth(ApiError::AuthFailed), request()));
    assert!(ctl.state().error.is_some());

    let result = block_on(ctl.login(&SucceedingAuth(response()), request()));
    assert!(result.is_ok());
    assert!(ctl.state().error.is_none());
}

// =============================================================
// Login failure
// =============================================================

#[test]
fn login_failure_stays_anonymous_with_error() {
    let mut ctl = controller();
    ctl.initialize();

    let result = block_on(ctl.login(&RejectingAuth(ApiError::AuthFailed), request()));
    assert_eq!(result, Err(ApiError::AuthFailed));

    assert!(!ctl.state().is_authenticated);
    assert!(!ctl.state().loading);
    assert!(ctl.state().error.is_some());
    assert!(!ctl.store().has_session());
    assert_eq!(ctl.store().read(), None);
}

#[test]
fn login_network_failure_uses_generic_message() {
    let mut ctl = controller();
    ctl.initialize();

    let err = ApiError::Network("timed out".to_owned());
    let result = block_on(ctl.login(&RejectingAuth(err.clone()), request()));
    assert_eq!(result, Err(err));

    let message = ctl.state().error.clone().expect("error message set");
    assert!(!message.contains("timed out"), "raw error leaked: {message}");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_store_and_projection() {
    let mut ctl = controller();
    ctl.initialize();
    let _ = block_on(ctl.login(&SucceedingAuth(response()), request()));
    assert!(ctl.state().is_authenticated);

    ctl.logout();
    assert_eq!(*ctl.state(), AuthState::anonymous());
    assert!(!ctl.store().has_session());
}

#[test]
fn logout_resets_stale_error() {
    let mut ctl = controller();
    ctl.initialize();
    let _ = block_on(ctl.login(&RejectingAuth(ApiError::AuthFailed), request()));
    assert!(ctl.state().error.is_some());

    ctl.logout();
    assert!(ctl.state().error.is_none());
}

#[test]
fn logout_from_anonymous_is_a_no_op() {
    let mut ctl = controller();
    ctl.initialize();
    ctl.logout();
    assert_eq!(*ctl.state(), AuthState::anonymous());
}
