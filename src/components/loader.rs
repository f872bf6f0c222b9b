use leptos::prelude::*;

/// Centered loading indicator used while resources resolve.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" aria-busy="true">
            <div class="loader__spinner"></div>
        </div>
    }
}
