//! Pagination row rendering the computed page window.

use leptos::prelude::*;

use crate::util::pagination::{PageItem, page_window};

/// Pagination control for the 1-based pages the UI works in.
///
/// Renders previous/next arrows (disabled at the bounds) around the
/// window computed by [`page_window`] with one sibling on each side.
/// `on_page` receives the selected 1-based page; converting to the
/// 0-based index the list APIs expect happens at the fetch call site.
#[component]
pub fn PaginationControl(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let items = move || {
        match page_window(current_page.get(), total_pages.get(), 1) {
            Ok(items) => items,
            Err(err) => {
                log::error!("pagination window: {err}");
                debug_assert!(false, "pagination window: {err}");
                Vec::new()
            }
        }
    };

    let on_previous = move |_| {
        let page = current_page.get();
        if page > 1 {
            on_page.run(page - 1);
        }
    };
    let on_next = move |_| {
        let page = current_page.get();
        if page < total_pages.get() {
            on_page.run(page + 1);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pages">
            <button
                class="pagination__button"
                disabled=move || current_page.get() <= 1
                on:click=on_previous
            >
                "‹"
            </button>
            {move || {
                items()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => {
                            let active = move || page == current_page.get();
                            view! {
                                <button
                                    class="pagination__button"
                                    class:pagination__button--active=active
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Ellipsis => {
                            view! { <span class="pagination__gap">"..."</span> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="pagination__button"
                disabled={move || current_page.get() >= total_pages.get()}
                on:click=on_next
            >
                "›"
            </button>
        </nav>
    }
}
