//! Edit an existing post.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::alert::Alert;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::pages::redirect_when_anonymous;

/// Loads the post into a composer and submits to `PUT /posts/{id}`.
/// Editing someone else's post is rejected server-side; the UI only
/// links here from the owner's detail view.
#[component]
pub fn EditPostPage() -> impl IntoView {
    redirect_when_anonymous();

    let params = use_params_map();
    let post_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0)
    });

    let post = LocalResource::new(move || {
        let id = post_id.get();
        async move { crate::net::api::fetch_post(id).await }
    });

    let draft = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Seed the draft once the post arrives; later refetches must not
    // clobber what the user is typing.
    Effect::new(move || {
        if let Some(Ok(detail)) = post.get() {
            if draft.get_untracked().is_none() {
                draft.set(Some(detail.content));
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let Some(body) = draft.get() else { return };
        let body = body.trim().to_owned();
        if body.is_empty() || submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let id = post_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_post(id, &body).await {
                    Ok(_) => navigate(&format!("/post/{id}"), NavigateOptions::default()),
                    Err(err) => {
                        log::warn!("post update failed: {err}");
                        error.set(Some("Could not save the post. Please try again.".to_owned()));
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
                <h1>"Edit post"</h1>
                <Show
                    when=move || draft.get().is_some()
                    fallback=move || view! { <Loader/> }
                >
                    <form
                        class="write-page__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <textarea
                            class="write-page__input"
                            prop:value=move || draft.get().unwrap_or_default()
                            on:input=move |ev| draft.set(Some(event_target_value(&ev)))
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
                            "Save"
                        </button>
                    </form>
                </Show>
            </main>
        </div>
    }
}
