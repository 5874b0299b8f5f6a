//! Comments section: live-subscribed list, submission form, like buttons.
//!
//! Validation runs client-side before the POST (the server re-checks), and
//! the created record is folded through the same idempotent event path the
//! live feed uses, so it shows up exactly once. A session flag keeps the
//! like button one-shot per visitor session; the count itself is maintained
//! by an atomic increment on the server.

use leptos::prelude::*;

use records::{NewComment, validate_comment};
#[cfg(feature = "hydrate")]
use records::LiveEvent;

use crate::state::records::SiteRecords;
use crate::util::storage;

#[component]
pub fn CommentsSection() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteRecords>>();
    let author = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let input = NewComment {
            author: author.get_untracked().trim().to_owned(),
            body: body.get_untracked().trim().to_owned(),
        };
        if let Err(reason) = validate_comment(&input) {
            error.set(Some(reason.to_string()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_comment(&input).await {
                    Ok(comment) => {
                        site.update(|s| s.apply_event(LiveEvent::CommentAdded { comment }));
                        author.set(String::new());
                        body.set(String::new());
                    }
                    Err(reason) => error.set(Some(reason)),
                }
            });
        }
    };

    let like = move |id: uuid::Uuid| {
        let flag = format!("liked_comment:{id}");
        if storage::session_flag(&flag) {
            return;
        }
        storage::set_session_flag(&flag);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(likes) = api::like_comment(id).await {
                    site.update(|s| s.apply_event(LiveEvent::CommentLiked { id, likes }));
                }
            });
        }
    };

    view! {
        <section class="comments" id="comments">
            <h2>"Comments"</h2>
            <ul class="comments__list">
                {move || {
                    site.get()
                        .comments
                        .iter()
                        .map(|comment| {
                            let id = comment.id;
                            let comment_author = comment.author.clone();
                            let comment_body = comment.body.clone();
                            let likes = comment.likes;
                            view! {
                                <li class="comments__item">
                                    <span class="comments__author">{comment_author}</span>
                                    <p class="comments__body">{comment_body}</p>
                                    <button class="comments__like" on:click=move |_| like(id)>
                                        "♥ " {likes}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            {move || error.get().map(|reason| view! { <p class="form__error">{reason}</p> })}
            <div class="comments__form">
                <input
                    type="text"
                    placeholder="your name"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="say something nice"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=submit>
                    "Post"
                </button>
            </div>
        </section>
    }
}
