//! Site view counter and like button.
//!
//! Session-scoped flags stop a reload from re-counting a view or a visitor
//! from stacking likes; the counters themselves advance by atomic increment
//! on the server, so concurrent visitors never lose updates.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use records::{CounterValue, LiveEvent};

use crate::state::records::SiteRecords;
use crate::util::storage;

const VIEWED_FLAG: &str = "view_counted";
const LIKED_FLAG: &str = "site_liked";

#[component]
pub fn SiteCounters() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteRecords>>();

    // Count this session's first visit; otherwise just read the value.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            let first_visit = !storage::session_flag(VIEWED_FLAG);
            if first_visit {
                storage::set_session_flag(VIEWED_FLAG);
            }
            wasm_bindgen_futures::spawn_local(async move {
                let value = if first_visit {
                    api::hit_counter("views").await
                } else {
                    api::fetch_counter("views").await
                };
                if let Ok(value) = value {
                    site.update(|s| {
                        s.apply_event(LiveEvent::CounterChanged {
                            counter: CounterValue { name: "views".into(), value },
                        });
                    });
                }
            });
        }
    });

    let like = move |_| {
        if storage::session_flag(LIKED_FLAG) {
            return;
        }
        storage::set_session_flag(LIKED_FLAG);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(value) = api::hit_counter("likes").await {
                    site.update(|s| {
                        s.apply_event(LiveEvent::CounterChanged {
                            counter: CounterValue { name: "likes".into(), value },
                        });
                    });
                }
            });
        }
    };

    view! {
        <div class="site-counters">
            <span class="site-counters__views">{move || site.get().counter("views")} " visits"</span>
            <button class="site-counters__like" on:click=like>
                "♥ " {move || site.get().counter("likes")}
            </button>
        </div>
    }
}
