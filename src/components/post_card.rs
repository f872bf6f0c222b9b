//! Post summary card for the forest list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Post;
use crate::util::time::display_age;

/// Clickable card navigating to the post's detail page. Posts are
/// anonymous; the only identity shown is a "mine" badge on the
/// caller's own posts.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let navigate = use_navigate();
    let post_id = post.id;
    let edited = post.updated_at.is_some();
    let age = display_age(&post.created_at);

    view! {
        <article
            class="post-card"
            on:click=move |_| {
                navigate(&format!("/post/{post_id}"), NavigateOptions::default());
            }
        >
            <p class="post-card__content">{post.content}</p>
            <footer class="post-card__meta">
                <span class="post-card__age">
                    {age}
                    {edited.then(|| view! { <em class="post-card__edited">" (edited)"</em> })}
                </span>
                {post.is_mine.then(|| view! { <span class="post-card__mine">"mine"</span> })}
                <span class="post-card__counts">
                    <span title="Checks">"✓ " {post.check_count}</span>
                    <span title="Likes">"♥ " {post.like_count}</span>
                    <span title="Comments">"💬 " {post.comment_count}</span>
                </span>
            </footer>
        </article>
    }
}
