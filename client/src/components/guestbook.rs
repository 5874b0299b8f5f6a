//! Guestbook section: signed entries plus the signing form.

use leptos::prelude::*;

use records::{NewGuestbookEntry, validate_guestbook};
#[cfg(feature = "hydrate")]
use records::LiveEvent;

use crate::state::records::SiteRecords;

#[component]
pub fn GuestbookSection() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteRecords>>();
    let author = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let input = NewGuestbookEntry {
            author: author.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        if let Err(reason) = validate_guestbook(&input) {
            error.set(Some(reason.to_string()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_guestbook(&input).await {
                    Ok(entry) => {
                        site.update(|s| s.apply_event(LiveEvent::GuestbookAdded { entry }));
                        author.set(String::new());
                        message.set(String::new());
                    }
                    Err(reason) => error.set(Some(reason)),
                }
            });
        }
    };

    view! {
        <section class="guestbook" id="guestbook">
            <h2>"Guestbook"</h2>
            <ul class="guestbook__list">
                {move || {
                    site.get()
                        .guestbook
                        .iter()
                        .map(|entry| {
                            let entry_author = entry.author.clone();
                            let entry_message = entry.message.clone();
                            view! {
                                <li class="guestbook__item">
                                    <span class="guestbook__author">{entry_author}</span>
                                    <p class="guestbook__message">{entry_message}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            {move || error.get().map(|reason| view! { <p class="form__error">{reason}</p> })}
            <div class="guestbook__form">
                <input
                    type="text"
                    placeholder="your name"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="leave a trace"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=submit>
                    "Sign"
                </button>
            </div>
        </section>
    }
}
