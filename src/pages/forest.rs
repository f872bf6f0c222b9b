//! The forest: paginated anonymous post list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::pagination::PaginationControl;
use crate::components::post_card::PostCard;
use crate::net::types::{Page, Post};
use crate::pages::redirect_when_anonymous;

const POST_PAGE_SIZE: u32 = 10;

/// Post list with pagination. The page signal is 1-based; the fetch
/// converts to the 0-based index the list API counts in.
#[component]
pub fn ForestPage() -> impl IntoView {
    redirect_when_anonymous();

    let page = RwSignal::new(1_u32);
    let posts = LocalResource::new(move || {
        let page = page.get();
        async move { crate::net::api::fetch_posts(page - 1, POST_PAGE_SIZE).await }
    });

    let on_page = Callback::new(move |selected: u32| page.set(selected));

    view! {
        <div class="forest-page">
            <Header/>
            <main class="forest-page__main">
                <div class="forest-page__actions">
                    <A href="/write" attr:class="btn btn--primary">
                        "Write a post"
                    </A>
                </div>

                <Suspense fallback=move || view! { <Loader/> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| match result {
                                Ok(list) => post_list(&list, page, on_page).into_any(),
                                Err(err) => {
                                    view! {
                                        <p class="forest-page__error">
                                            {format!("Could not load posts: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

fn post_list(list: &Page<Post>, page: RwSignal<u32>, on_page: Callback<u32>) -> impl IntoView {
    let total_pages = list.total_pages.max(1);
    let cards = list
        .content
        .iter()
        .cloned()
        .map(|post| view! { <PostCard post=post/> })
        .collect::<Vec<_>>();
    let empty = list.content.is_empty();

    view! {
        <section class="forest-page__list">
            <Show when=move || empty>
                <p class="forest-page__empty">"Nothing here yet. Be the first to post."</p>
            </Show>
            {cards}
            <Show when={move || total_pages > 1}>
                <PaginationControl
                    current_page=Signal::derive(move || page.get())
                    total_pages=total_pages
                    on_page=on_page
                />
            </Show>
        </section>
    }
}
