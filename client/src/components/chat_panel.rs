//! Assistant chat widget: transcript plus prompt input.
//!
//! Submits the full running transcript to the `/api/chat` proxy and appends
//! the reply. A failed call appends a fallback line instead — earlier turns
//! are never touched. The completion checks that the widget is still open
//! before applying, so a close while the call is in flight cannot update
//! disposed state.

use leptos::prelude::*;

use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::chat::CHAT_FALLBACK;
#[cfg(feature = "hydrate")]
use crate::state::widgets::{WidgetId, WidgetRegistry};

/// Chat panel showing conversation history and a prompt input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    #[cfg(feature = "hydrate")]
    let registry = expect_context::<RwSignal<WidgetRegistry>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get_untracked().trim().to_owned();
        if text.is_empty() || chat.get_untracked().loading {
            return;
        }
        chat.update(|c| c.push_user(text));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::{self, ChatError};

            let transcript = chat.get_untracked().transcript();
            wasm_bindgen_futures::spawn_local(async move {
                let reply = match api::post_chat(&transcript).await {
                    Ok(reply) => reply,
                    Err(ChatError::RateLimited) => "rate limit exceeded — give it a minute.".to_owned(),
                    Err(_) => CHAT_FALLBACK.to_owned(),
                };
                if !registry.get_untracked().is_open(WidgetId::Chat) {
                    return;
                }
                chat.update(|c| c.push_assistant(reply));
            });
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages">
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_assistant = msg.role == "assistant";
                            let role = msg.role.clone();
                            let content = msg.content.clone();
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--assistant=is_assistant
                                >
                                    <span class="chat-panel__role">{role}</span>
                                    <div class="chat-panel__content">{content}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask me about my work..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
