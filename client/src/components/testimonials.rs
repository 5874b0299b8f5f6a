//! Testimonials section: live list plus a submission form.

use leptos::prelude::*;

use records::{NewTestimonial, validate_testimonial};
#[cfg(feature = "hydrate")]
use records::LiveEvent;

use crate::state::records::SiteRecords;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteRecords>>();
    let author = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let input = NewTestimonial {
            author: author.get_untracked().trim().to_owned(),
            role: role.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        if let Err(reason) = validate_testimonial(&input) {
            error.set(Some(reason.to_string()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_testimonial(&input).await {
                    Ok(testimonial) => {
                        site.update(|s| s.apply_event(LiveEvent::TestimonialAdded { testimonial }));
                        author.set(String::new());
                        role.set(String::new());
                        message.set(String::new());
                    }
                    Err(reason) => error.set(Some(reason)),
                }
            });
        }
    };

    view! {
        <section class="testimonials" id="testimonials">
            <h2>"Kind words"</h2>
            <div class="testimonials__grid">
                {move || {
                    site.get()
                        .testimonials
                        .iter()
                        .map(|t| {
                            let t_author = t.author.clone();
                            let t_role = t.role.clone();
                            let t_message = t.message.clone();
                            view! {
                                <blockquote class="testimonials__card">
                                    <p>{t_message}</p>
                                    <footer>
                                        <span class="testimonials__author">{t_author}</span>
                                        <span class="testimonials__role">{t_role}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            {move || error.get().map(|reason| view! { <p class="form__error">{reason}</p> })}
            <div class="testimonials__form">
                <input
                    type="text"
                    placeholder="your name"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="role / company"
                    prop:value=move || role.get()
                    on:input=move |ev| role.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="your testimonial"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <button class="btn" on:click=submit>
                    "Submit"
                </button>
            </div>
        </section>
    }
}
