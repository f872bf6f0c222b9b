//! Top navigation bar with team identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_session;

/// Header shown on every authenticated page. Logout is a pure
/// client-side clear followed by a redirect to the login page.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let team_name = move || session.auth().team_name.unwrap_or_default();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <A href="/forest" attr:class="header__brand">
                "대나무숲"
            </A>
            <nav class="header__nav">
                <span class="header__team">{team_name}</span>
                <A href="/change-password" attr:class="header__link">
                    "Change password"
                </A>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
        </header>
    }
}
