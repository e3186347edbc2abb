//! Loading Component

use leptos::*;

/// Spinner shown until a page's first fetch lands
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
