//! Team registration page.

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::Alert;
use crate::state::register::RegistrationState;

/// Register a new team: team name plus member head count. The backend
/// answers with one-time passwords for every member; they are handed to
/// the result page through [`RegistrationState`] and shown exactly once.
#[component]
pub fn RegisterTeamPage() -> impl IntoView {
    let registration = expect_context::<RwSignal<RegistrationState>>();

    let team_name = RwSignal::new(String::new());
    let member_count = RwSignal::new(String::from("4"));
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        let name = team_name.get().trim().to_owned();
        let Ok(count) = member_count.get().trim().parse::<u32>() else {
            error.set(Some("Enter a valid member count.".to_owned()));
            return;
        };
        if name.is_empty() || !(1..=30).contains(&count) {
            error.set(Some(
                "Team name and a member count between 1 and 30 are required.".to_owned(),
            ));
            return;
        }
        error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let request = crate::net::types::RegisterTeamRequest {
                team_name: name,
                number_of_members: count,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::register_team(&request).await {
                    Ok(response) => {
                        registration.set(RegistrationState {
                            result: Some(response),
                        });
                        navigate("/team-created", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("team registration failed: {err}");
                        error.set(Some(
                            "Could not register the team. Please try again.".to_owned(),
                        ));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, registration);
            submitting.set(false);
        }
    });

    view! {
        <div class="register-page">
            <h1 class="register-page__title">"Register a team"</h1>

            <form
                class="register-page__form"
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
                    "Number of members"
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        max="30"
                        prop:value=move || member_count.get()
                        on:input=move |ev| member_count.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <Alert
                        message=Signal::derive(move || error.get().unwrap_or_default())
                        on_dismiss=Callback::new(move |()| error.set(None))
                    />
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>

            <p class="register-page__login">
                "Already registered? " <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
