//! Contact form: validated client-side, delivered via the server action.
//!
//! A partial failure (message stored, notification email failed) surfaces
//! as a non-blocking warning — the visitor's message was durably recorded.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use records::{ContactMessage, validate_contact};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SendState {
    Idle,
    Sending,
    Sent { warning: Option<String> },
    Failed(String),
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let state = RwSignal::new(SendState::Idle);

    let submit = move |_| {
        if state.get_untracked() == SendState::Sending {
            return;
        }
        let input = ContactMessage {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        if let Err(reason) = validate_contact(&input) {
            state.set(SendState::Failed(reason.to_string()));
            return;
        }
        state.set(SendState::Sending);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_contact(&input).await {
                    Ok(ack) if ack.ok => {
                        state.set(SendState::Sent { warning: ack.warning });
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Ok(_) => state.set(SendState::Failed("couldn't send your message".into())),
                    Err(reason) => state.set(SendState::Failed(reason)),
                }
            });
        }
    };

    view! {
        <section class="contact" id="contact">
            <h2>"Get in touch"</h2>
            <div class="contact__form">
                <input
                    type="text"
                    placeholder="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="what's on your mind?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || state.get() == SendState::Sending
                    on:click=submit
                >
                    {move || if state.get() == SendState::Sending { "Sending..." } else { "Send" }}
                </button>
            </div>
            {move || match state.get() {
                SendState::Sent { warning: None } => {
                    Some(view! { <p class="form__ok">"Thanks — I'll get back to you."</p> }.into_any())
                }
                SendState::Sent { warning: Some(warning) } => Some(
                    view! {
                        <p class="form__ok">
                            "Message received. " <span class="form__warning">{warning}</span>
                        </p>
                    }
                        .into_any(),
                ),
                SendState::Failed(reason) => {
                    Some(view! { <p class="form__error">{reason}</p> }.into_any())
                }
                _ => None,
            }}
        </section>
    }
}
