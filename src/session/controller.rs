//! The single writer of [`AuthState`].
//!
//! Lifecycle per page load: initializing (`loading = true`, no claims) →
//! resolved against the store → steady state, mutated only by explicit
//! `login`/`logout` calls. Everything runs on the single UI event thread;
//! `login` suspends only across the credential exchange, so no two
//! mutations of the projection can interleave. Callers disable the
//! submit control while `loading` is true to avoid overlapping logins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::session::store::{Session, SessionStore, StorageBackend};
use crate::state::auth::AuthState;

/// Credential exchange collaborator.
///
/// The production impl is [`crate::net::api::RestAuth`]; tests substitute
/// stubs that resolve or reject without touching the network.
#[allow(async_fn_in_trait)]
pub trait AuthExchange {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// Owns the durable session and its in-memory projection.
pub struct SessionController<S: StorageBackend> {
    store: SessionStore<S>,
    state: AuthState,
}

impl<S: StorageBackend> SessionController<S> {
    /// A controller in the initializing state; call [`initialize`]
    /// before the UI reads the projection.
    ///
    /// [`initialize`]: Self::initialize
    pub fn new(store: SessionStore<S>) -> Self {
        Self {
            store,
            state: AuthState::default(),
        }
    }

    /// The current projection. Clone it into whatever reactive wrapper
    /// the UI uses; only this controller writes it.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Resolve the projection against the store. A store that reads as
    /// absent (including after a corruption self-heal) resolves to the
    /// anonymous baseline. Always ends with `loading = false`.
    pub fn initialize(&mut self) {
        self.state = if self.store.has_session() {
            match self.store.read() {
                Some(session) => AuthState::authenticated(&session),
                None => AuthState::anonymous(),
            }
        } else {
            AuthState::anonymous()
        };
    }

    /// Exchange credentials for a session.
    ///
    /// On success the session is persisted first, then projected. On
    /// failure neither the store nor the authenticated claims change;
    /// the error is surfaced twice, as `AuthState::error` for the login
    /// view and as the returned `Err` for the calling code path.
    pub async fn login<E: AuthExchange>(
        &mut self,
        exchange: &E,
        request: LoginRequest,
    ) -> Result<(), ApiError> {
        self.state.loading = true;
        self.state.error = None;

        match exchange.login(&request).await {
            Ok(response) => {
                let session = Session {
                    access_token: response.access_token,
                    refresh_token: response.refresh_token,
                    member_id: response.member_id,
                    team_id: response.team_id,
                    team_name: response.team_name,
                };
                self.store.write(&session);
                self.state = AuthState::authenticated(&session);
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.state = AuthState {
                    error: Some(login_error_message(&err)),
                    ..AuthState::anonymous()
                };
                Err(err)
            }
        }
    }

    /// Pure client-side invalidation: clear the store, reset the
    /// projection (stale errors included). The access token simply stops
    /// being sent; no server call is made. Cannot fail.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = AuthState::anonymous();
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }
}

/// User-facing message for a failed login.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::AuthFailed => {
            "Login failed. Check your team name and password.".to_owned()
        }
        ApiError::Network(_) | ApiError::Status(_) => {
            "Could not reach the server. Please try again.".to_owned()
        }
    }
}
