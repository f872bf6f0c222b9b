//! Post detail: content, reactions, and the threaded comment list.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::comment_item::CommentItem;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::pagination::PaginationControl;
use crate::net::types::{PostDetail, ReactionKind};
use crate::pages::redirect_when_anonymous;
use crate::util::time::display_date;

const COMMENT_PAGE_SIZE: u32 = 20;

/// Post detail page. Reactions and comment mutations bump the refresh
/// counters so the affected resources refetch; the server stays the
/// source of truth for every count.
#[component]
pub fn PostDetailPage() -> impl IntoView {
    redirect_when_anonymous();

    let params = use_params_map();
    let post_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0)
    });

    let post_refresh = RwSignal::new(0_u32);
    let comment_page = RwSignal::new(1_u32);
    let comment_refresh = RwSignal::new(0_u32);

    let post = LocalResource::new(move || {
        post_refresh.track();
        let id = post_id.get();
        async move { crate::net::api::fetch_post(id).await }
    });
    let comments = LocalResource::new(move || {
        comment_refresh.track();
        let id = post_id.get();
        let page = comment_page.get();
        async move { crate::net::api::fetch_comments(id, page - 1, COMMENT_PAGE_SIZE).await }
    });

    let show_delete = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_react = Callback::new(move |kind: ReactionKind| {
        #[cfg(feature = "hydrate")]
        {
            let id = post_id.get_untracked();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::react_to_post(id, kind).await {
                    log::warn!("post reaction failed: {err}");
                }
                post_refresh.update(|n| *n += 1);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = kind;
    });

    let on_delete_post = Callback::new(move |()| {
        show_delete.set(false);
        #[cfg(feature = "hydrate")]
        {
            let id = post_id.get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_post(id).await {
                    Ok(()) => navigate("/forest", NavigateOptions::default()),
                    Err(err) => log::warn!("post delete failed: {err}"),
                }
            });
        }
    });

    let on_comment_react = Callback::new(move |(comment_id, kind): (i64, ReactionKind)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::react_to_comment(comment_id, kind).await {
                    log::warn!("comment reaction failed: {err}");
                }
                comment_refresh.update(|n| *n += 1);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (comment_id, kind);
    });

    let on_comment_save = Callback::new(move |(comment_id, content): (i64, String)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::update_comment(comment_id, &content).await {
                    log::warn!("comment update failed: {err}");
                }
                comment_refresh.update(|n| *n += 1);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (comment_id, content);
    });

    let on_comment_delete = Callback::new(move |comment_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::delete_comment(comment_id).await {
                    log::warn!("comment delete failed: {err}");
                }
                comment_refresh.update(|n| *n += 1);
                // The post's comment count changed too.
                post_refresh.update(|n| *n += 1);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = comment_id;
    });

    let comment_draft = RwSignal::new(String::new());
    let on_comment_submit = Callback::new(move |()| {
        let content = comment_draft.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = post_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_comment(id, &content).await {
                    Ok(_) => {
                        comment_draft.set(String::new());
                        comment_refresh.update(|n| *n += 1);
                        post_refresh.update(|n| *n += 1);
                    }
                    Err(err) => log::warn!("comment create failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = content;
    });

    view! {
        <div class="post-page">
            <Header/>
            <main class="post-page__main">
                <Suspense fallback=move || view! { <Loader/> }>
                    {move || {
                        post.get()
                            .map(|result| match result {
                                Ok(detail) => {
                                    post_body(&detail, on_react, show_delete).into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="post-page__error">
                                            {format!("Could not load the post: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <section class="post-page__comments">
                    <h2>"Comments"</h2>
                    <form
                        class="comment-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_comment_submit.run(());
                        }
                    >
                        <textarea
                            class="comment-form__input"
                            placeholder="Leave an anonymous comment"
                            prop:value=move || comment_draft.get()
                            on:input=move |ev| comment_draft.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit">
                            "Comment"
                        </button>
                    </form>

                    <Suspense fallback=move || view! { <Loader/> }>
                        {move || {
                            comments
                                .get()
                                .map(|result| match result {
                                    Ok(list) => {
                                        let total_pages = list.total_pages.max(1);
                                        let items = list
                                            .content
                                            .iter()
                                            .cloned()
                                            .map(|comment| {
                                                view! {
                                                    <CommentItem
                                                        comment=comment
                                                        on_react=on_comment_react
                                                        on_save=on_comment_save
                                                        on_delete=on_comment_delete
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>();
                                        view! {
                                            <ul class="comment-list">{items}</ul>
                                            <Show when={move || total_pages > 1}>
                                                <PaginationControl
                                                    current_page=Signal::derive(move || {
                                                        comment_page.get()
                                                    })
                                                    total_pages=total_pages
                                                    on_page=Callback::new(move |selected| {
                                                        comment_page.set(selected)
                                                    })
                                                />
                                            </Show>
                                        }
                                            .into_any()
                                    }
                                    Err(err) => {
                                        view! {
                                            <p class="post-page__error">
                                                {format!("Could not load comments: {err}")}
                                            </p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </main>

            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    message="Delete this post? This cannot be undone."
                    on_confirm=on_delete_post
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                />
            </Show>
        </div>
    }
}

/// Post content, timestamps, reaction toggles, and owner controls.
fn post_body(
    detail: &PostDetail,
    on_react: Callback<ReactionKind>,
    show_delete: RwSignal<bool>,
) -> impl IntoView {
    let content = detail.content.clone();
    let created = display_date(&detail.created_at);
    let edited = detail.updated_at.as_deref().map(display_date);
    let has_checked = detail.has_checked;
    let has_liked = detail.has_liked;
    let is_mine = detail.is_mine;
    let post_id = detail.id;
    let check_count = detail.check_count;
    let like_count = detail.like_count;

    view! {
        <article class="post">
            <p class="post__content">{content}</p>
            <p class="post__dates">
                {created}
                {edited.map(|at| view! { <em>{format!(" (edited {at})")}</em> })}
            </p>
            <div class="post__actions">
                <button
                    class="btn btn--reaction"
                    class:btn--reaction-active=move || has_checked
                    on:click=move |_| on_react.run(ReactionKind::Check)
                >
                    "✓ " {check_count}
                </button>
                <button
                    class="btn btn--reaction"
                    class:btn--reaction-active=move || has_liked
                    on:click=move |_| on_react.run(ReactionKind::Like)
                >
                    "♥ " {like_count}
                </button>
                <Show when=move || is_mine>
                    <A href=format!("/edit/{post_id}") attr:class="btn btn--ghost">
                        "Edit"
                    </A>
                    <button class="btn btn--ghost" on:click=move |_| show_delete.set(true)>
                        "Delete"
                    </button>
                </Show>
            </div>
        </article>
    }
}
