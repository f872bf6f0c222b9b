#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::store::Session;

/// In-memory projection of the persisted session, read by the UI tree.
///
/// `SessionController` is the only writer. `Default` is the initializing
/// state: no claims yet, `loading = true`, so routing decisions wait for
/// the store to be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub member_id: Option<i64>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            member_id: None,
            team_id: None,
            team_name: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    /// Resolved state with no session: all identity fields cleared.
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// Resolved state carrying the identity of `session`.
    pub fn authenticated(session: &Session) -> Self {
        Self {
            is_authenticated: true,
            member_id: Some(session.member_id),
            team_id: Some(session.team_id),
            team_name: Some(session.team_name.clone()),
            loading: false,
            error: None,
        }
    }
}
