use leptos::prelude::*;

#[server]
pub async fn send_contact(name: String, email: String, message: String) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::{models::ContactSubmission, relay, state::AppState};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    relay::deliver(state.relay.as_ref(), ContactSubmission { name, email, message })
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
