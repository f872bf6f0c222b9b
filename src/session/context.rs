//! Leptos-facing session context.
//!
//! A [`SessionContext`] is created once at the application root and
//! provided to the tree; views read the [`AuthState`] projection through
//! it and trigger transitions through its operations. Each operation
//! runs a [`SessionController`] over browser localStorage and publishes
//! the resulting projection to the signal, keeping the controller the
//! only writer.
//!
//! On the server (SSR) the operations are stubs: the projection stays in
//! its loading state and the real resolution happens after hydration.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
use crate::net::api::RestAuth;
#[cfg(feature = "hydrate")]
use crate::session::controller::SessionController;
#[cfg(feature = "hydrate")]
use crate::session::store::SessionStore;

/// Process-wide authentication context, `Copy` like the signals it wraps.
#[derive(Clone, Copy)]
pub struct SessionContext {
    auth: RwSignal<AuthState>,
}

impl SessionContext {
    /// A context in the initializing state (`loading = true`).
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive read of the current projection.
    pub fn auth(&self) -> AuthState {
        self.auth.get()
    }

    /// Resolve the projection from localStorage. Called once from the
    /// root component, before any route reads the projection.
    pub fn initialize(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mut controller = SessionController::new(SessionStore::local());
            controller.initialize();
            self.auth.set(controller.state().clone());
        }
    }

    /// Log in with team credentials.
    ///
    /// The projection carries the failure message for the login view;
    /// the returned result lets the caller react as well (navigate,
    /// keep the form, ...).
    pub async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.auth.update(|state| {
                state.loading = true;
                state.error = None;
            });
            let mut controller = SessionController::new(SessionStore::local());
            let result = controller.login(&RestAuth, request).await;
            self.auth.set(controller.state().clone());
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// Client-side logout; never fails.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mut controller = SessionController::new(SessionStore::local());
            controller.logout();
            self.auth.set(controller.state().clone());
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the session context provided by the application root.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
