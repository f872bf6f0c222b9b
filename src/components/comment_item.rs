//! Single comment row with inline editing and reactions.

use leptos::prelude::*;

use crate::net::types::{Comment, ReactionKind};
use crate::util::time::display_age;

/// One comment. The caller's own comments get inline edit and delete
/// controls; every comment exposes the two reaction toggles. All
/// mutations are delegated upward so the page can refetch the list.
#[component]
pub fn CommentItem(
    comment: Comment,
    on_react: Callback<(i64, ReactionKind)>,
    on_save: Callback<(i64, String)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let comment_id = comment.id;
    let is_mine = comment.is_mine;
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(comment.content.clone());
    let original = comment.content.clone();
    let age = display_age(&comment.created_at);
    let edited = comment.updated_at.is_some();

    let on_save_click = move |_| {
        let content = draft.get();
        if content.trim().is_empty() {
            return;
        }
        editing.set(false);
        on_save.run((comment_id, content.trim().to_owned()));
    };

    view! {
        <li class="comment">
            <Show
                when=move || editing.get()
                fallback={
                    let content = original.clone();
                    move || view! { <p class="comment__content">{content.clone()}</p> }
                }
            >
                <textarea
                    class="comment__editor"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
            </Show>
            <footer class="comment__meta">
                <span class="comment__age">
                    {age.clone()}
                    {edited.then(|| view! { <em>" (edited)"</em> })}
                </span>
                <span class="comment__actions">
                    <button
                        class="btn btn--reaction"
                        title="Check"
                        on:click=move |_| on_react.run((comment_id, ReactionKind::Check))
                    >
                        "✓ " {comment.check_count}
                    </button>
                    <button
                        class="btn btn--reaction"
                        title="Like"
                        on:click=move |_| on_react.run((comment_id, ReactionKind::Like))
                    >
                        "♥ " {comment.like_count}
                    </button>
                    <Show when=move || is_mine && !editing.get()>
                        <button class="btn btn--ghost" on:click=move |_| editing.set(true)>
                            "Edit"
                        </button>
                        <button class="btn btn--ghost" on:click=move |_| on_delete.run(comment_id)>
                            "Delete"
                        </button>
                    </Show>
                    <Show when=move || editing.get()>
                        <button class="btn btn--ghost" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=on_save_click>
                            "Save"
                        </button>
                    </Show>
                </span>
            </footer>
        </li>
    }
}
