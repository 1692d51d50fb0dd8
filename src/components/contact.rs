use leptos::ev::{Event, FocusEvent, SubmitEvent};
use leptos::prelude::*;

use crate::dom::PageHandle;
use crate::models::{ContactField, ContactForm, ContactSubmission};
use crate::server_fns::SendContact;

#[component]
pub fn ContactSection(page: PageHandle) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let send_action = ServerAction::<SendContact>::new();

    // The owner is gone if the user navigated away mid-flight; try_update is
    // then a no-op.
    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            let outcome = result.map_err(|e| e.to_string());
            form.try_update(|f| page.contact_settled(f, outcome));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = form.try_update(|f| page.submit_contact(f)).flatten();
        if let Some(ContactSubmission { name, email, message }) = submission {
            send_action.dispatch(SendContact { name, email, message });
        }
    };

    view! {
        <section id="contact" class="contact-section">
            <h2 class="section-title">"Get In Touch"</h2>
            <p class="section-subtitle">"Have a project in mind or just want to say hi? Drop me a message."</p>

            <form class="contact-form" novalidate on:submit=on_submit>
                <FormField form=form field=ContactField::Name label="Name" placeholder="Your name"/>
                <FormField form=form field=ContactField::Email label="Email" kind="email" placeholder="your@email.com"/>
                <FormField form=form field=ContactField::Message label="Message" multiline=true placeholder="Your message"/>

                <button type="submit" class="btn btn-primary" disabled=move || send_action.pending().get()>
                    {move || if send_action.pending().get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let error = move || form.with(|f| f.visible_error(field));
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let on_blur = move |_: FocusEvent| form.update(|f| f.touch(field));

    let control = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows="5"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind
                id=id
                name=id
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group" class:invalid=move || error().is_some()>
            <label for=id>{label}</label>
            {control}
            {move || error().map(|e| view! { <p class="error">{e.to_string()}</p> })}
        </div>
    }
}
