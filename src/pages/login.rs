//! Login page: team name + password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::net::types::LoginRequest;
use crate::session::context::use_session;

/// Login form. The submit control is disabled while a login is in
/// flight (no overlapping attempts); on failure the form contents stay
/// put and the controller's error message renders as a dismissible
/// inline alert.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    // Already authenticated: straight to the forest.
    {
        let navigate = use_navigate();
        Effect::new(move || {
            let state = session.auth();
            if !state.loading && state.is_authenticated {
                navigate("/forest", NavigateOptions::default());
            }
        });
    }

    let team_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let dismissed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        if session.auth().loading {
            return;
        }
        let request = LoginRequest {
            team_name: team_name.get().trim().to_owned(),
            password: password.get(),
        };
        if request.team_name.is_empty() || request.password.is_empty() {
            return;
        }
        dismissed.set(false);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session.login(request).await.is_ok() {
                    navigate("/forest", NavigateOptions::default());
                }
                // On failure the error is already in AuthState; stay here.
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    let show_error = move || session.auth().error.is_some() && !dismissed.get();
    let error_message = Signal::derive(move || session.auth().error.unwrap_or_default());

    view! {
        <div class="login-page">
            <h1 class="login-page__title">"대나무숲"</h1>
            <p class="login-page__subtitle">"Anonymous team bulletin board"</p>

            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="field">
                    "Team name"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || team_name.get()
                        on:input=move |ev| team_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=show_error>
                    <Alert
                        message=error_message
                        on_dismiss=Callback::new(move |()| dismissed.set(true))
                    />
                </Show>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || session.auth().loading
                >
                    "Log in"
                </button>
            </form>

            <p class="login-page__register">
                "No team yet? " <A href="/register-team">"Register one"</A>
            </p>
        </div>
    }
}
