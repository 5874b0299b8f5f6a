//! Coding-time stats strip, fed by the same-origin WakaTime proxy.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::CodingStats;

#[component]
pub fn CodingStatsSection() -> impl IntoView {
    let stats = RwSignal::new(None::<CodingStats>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_coding_stats().await {
                    Ok(fetched) => stats.set(Some(fetched)),
                    Err(reason) => error.set(Some(reason)),
                }
            });
        }
    });

    view! {
        <section class="coding-stats">
            {move || match (stats.get(), error.get()) {
                (Some(s), _) => {
                    view! {
                        <div class="coding-stats__row">
                            <span>{format!("{:.0} hrs coded in the last 30 days", s.total_hours)}</span>
                            <span>{format!("{:.1} hrs/day average", s.daily_average_hours)}</span>
                            {s.top_language.map(|lang| view! { <span>"mostly " {lang}</span> })}
                        </div>
                    }
                        .into_any()
                }
                (None, Some(reason)) => {
                    view! { <div class="coding-stats__error">{reason}</div> }.into_any()
                }
                (None, None) => view! { <div class="coding-stats__row">"…"</div> }.into_any(),
            }}
        </section>
    }
}
