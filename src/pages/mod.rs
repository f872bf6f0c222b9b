//! One component per route.

pub mod change_password;
pub mod edit_post;
pub mod forest;
pub mod login;
pub mod password_result;
pub mod post_detail;
pub mod register_team;
pub mod write_post;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_session;

/// Auth gate shared by the protected pages: once the session has
/// resolved, anonymous visitors are sent to the login page. While
/// `loading` is true nothing happens, so the initial render never
/// redirects on a not-yet-resolved session.
pub(crate) fn redirect_when_anonymous() {
    let session = use_session();
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.auth();
        if !state.loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });
}
