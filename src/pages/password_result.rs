//! One-time display of the issued member passwords.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::register::RegistrationState;

/// Shown right after team registration. The passwords only exist in the
/// in-memory registration state; reloading or visiting directly has
/// nothing to show and bounces back to the registration form.
#[component]
pub fn PasswordResultPage() -> impl IntoView {
    let registration = expect_context::<RwSignal<RegistrationState>>();

    {
        let navigate = use_navigate();
        Effect::new(move || {
            if registration.get().result.is_none() {
                navigate("/register-team", NavigateOptions::default());
            }
        });
    }

    view! {
        <div class="password-result-page">
            {move || {
                registration
                    .get()
                    .result
                    .map(|result| {
                        view! {
                            <h1 class="password-result-page__title">
                                {format!("Team \"{}\" created", result.team_name)}
                            </h1>
                            <p class="password-result-page__notice">
                                "Hand one password to each member. They are shown only once."
                            </p>
                            <ol class="password-result-page__list">
                                {result
                                    .passwords
                                    .into_iter()
                                    .map(|password| {
                                        view! {
                                            <li class="password-result-page__item">
                                                <code>{password}</code>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ol>
                            <A href="/login" attr:class="btn btn--primary">
                                "Go to login"
                            </A>
                        }
                    })
            }}
        </div>
    }
}
