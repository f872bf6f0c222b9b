//! Compose a new anonymous post.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::Alert;
use crate::components::header::Header;
use crate::pages::redirect_when_anonymous;

/// Plain-text post composer. Submits to `POST /posts` and returns to
/// the forest on success.
#[component]
pub fn WritePostPage() -> impl IntoView {
    redirect_when_anonymous();

    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let body = content.get().trim().to_owned();
        if body.is_empty() || submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_post(&body).await {
                    Ok(_) => navigate("/forest", NavigateOptions::default()),
                    Err(err) => {
                        log::warn!("post create failed: {err}");
                        error.set(Some("Could not publish the post. Please try again.".to_owned()));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            submitting.set(false);
        }
    });

    view! {
        <div class="write-page">
            <Header/>
            <main class="write-page__main">
                <h1>"New post"</h1>
                <form
                    class="write-page__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <textarea
                        class="write-page__input"
                        placeholder="What's on your mind? Posts are anonymous."
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>

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
                        "Publish"
                    </button>
                </form>
            </main>
        </div>
    }
}
