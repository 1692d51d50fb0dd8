use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <A href="/" attr:class="btn btn-primary">"Back to the portfolio"</A>
        </div>
    }
}
