use leptos::prelude::*;

use crate::dom::PageHandle;

/// Overlay the page controller fades in while the skills section is unseen
#[component]
pub fn ScrollHint() -> impl IntoView {
    view! {
        <div id="scroll-hint" class="scroll-hint" aria-hidden="true">
            <span>"Scroll to explore"</span>
            <span class="scroll-hint-arrow">"↓"</span>
        </div>
    }
}

#[component]
pub fn ScrollToTop(page: PageHandle) -> impl IntoView {
    view! {
        <button
            id="scroll-to-top"
            class="scroll-to-top"
            aria-label="Scroll to top"
            on:click=move |_| page.scroll_to_top()
        >
            "↑"
        </button>
    }
}
