//! Inline dismissible notice for recoverable errors.

use leptos::prelude::*;

/// Inline alert — shown under forms for login/API failures. Dismissal is
/// the caller's state so the alert can reappear on the next failure.
#[component]
pub fn Alert(
    #[prop(into)] message: Signal<String>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <span class="alert__message">{move || message.get()}</span>
            <button
                class="alert__dismiss"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "×"
            </button>
        </div>
    }
}
