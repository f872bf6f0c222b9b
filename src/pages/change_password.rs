//! Member password change form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::Alert;
use crate::components::header::Header;
use crate::net::types::ChangePasswordRequest;
use crate::pages::redirect_when_anonymous;

/// Current + new password form for `PUT /members/password`. The new
/// password is typed twice; mismatches are caught before any request.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    redirect_when_anonymous();

    let current = RwSignal::new(String::new());
    let fresh = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        if current.get().is_empty() || fresh.get().is_empty() {
            error.set(Some("Both passwords are required.".to_owned()));
            return;
        }
        if fresh.get() != confirm.get() {
            error.set(Some("New passwords do not match.".to_owned()));
            return;
        }
        error.set(None);
        submitting.set(true);

        let request = ChangePasswordRequest {
            current_password: current.get(),
            new_password: fresh.get(),
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&request).await {
                    Ok(()) => navigate("/forest", NavigateOptions::default()),
                    Err(err) => {
                        log::warn!("password change failed: {err}");
                        error.set(Some(
                            "Could not change the password. Check the current one.".to_owned(),
                        ));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            submitting.set(false);
        }
    });

    view! {
        <div class="password-page">
            <Header/>
            <main class="password-page__main">
                <h1>"Change password"</h1>
                <form
                    class="password-page__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="field">
                        "Current password"
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || current.get()
                            on:input=move |ev| current.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "New password"
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || fresh.get()
                            on:input=move |ev| fresh.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Repeat new password"
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <Alert
                            message=Signal::derive(move || error.get().unwrap_or_default())
                            on_dismiss=Callback::new(move |()| error.set(None))
                        />
                    </Show>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        "Change password"
                    </button>
                </form>
            </main>
        </div>
    }
}
