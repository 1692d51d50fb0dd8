use leptos::prelude::*;

use crate::dom::PageHandle;
use crate::models::DISPLAY_NAME;

pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Nav(page: PageHandle) -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <button class="nav-link" on:click=move |_| page.navigate_to_section("home")>
                    {DISPLAY_NAME}
                </button>
            </div>

            <div class="nav-links">
                {SECTIONS
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <button class="nav-link" on:click=move |_| page.navigate_to_section(id)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
