//! GitHub activity viewer widget.
//!
//! Fetches one page of public events at a time; a full page implies more
//! pages exist. The last successful fetch is cached in localStorage and a
//! failed refetch falls back to a fresh-enough cache instead of an error.

use leptos::prelude::*;

use crate::content;
use crate::state::activity::{ActivitySource, ActivityState, PAGE_SIZE};
#[cfg(feature = "hydrate")]
use crate::state::widgets::{WidgetId, WidgetRegistry};

/// Activity panel with client-side pagination and stale-cache fallback.
#[component]
pub fn ActivityPanel() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();
    #[cfg(feature = "hydrate")]
    let registry = expect_context::<RwSignal<WidgetRegistry>>();

    let fetch_page = move |page: usize| {
        activity.update(|a| a.loading = true);
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::util::activity_cache::{self, Resolution};
            use crate::util::pointer::now_ms;

            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_github_events(content::GITHUB_USER, page, PAGE_SIZE).await;
                if !registry.get_untracked().is_open(WidgetId::Activity) {
                    return;
                }
                match activity_cache::resolve(fetched, activity_cache::load(), now_ms()) {
                    Resolution::Live(events) => {
                        activity_cache::store(&events, now_ms());
                        activity.update(|a| a.apply_page(page, events));
                    }
                    Resolution::Stale(events) => activity.update(|a| a.apply_cache(events)),
                    Resolution::Failed(message) => activity.update(|a| a.apply_error(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    };

    // Initial load: first page plus the contribution total, once.
    Effect::new(move || {
        if activity.get_untracked().source == ActivitySource::None && activity.get_untracked().error.is_none() {
            fetch_page(1);
            #[cfg(feature = "hydrate")]
            {
                use crate::net::api;
                wasm_bindgen_futures::spawn_local(async move {
                    let total = api::fetch_contribution_total(content::GITHUB_USER).await;
                    if registry.get_untracked().is_open(WidgetId::Activity) {
                        activity.update(|a| a.contributions = total);
                    }
                });
            }
        }
    });

    let prev_disabled = move || activity.get().page <= 1 || activity.get().loading;
    let next_disabled = move || !activity.get().has_more || activity.get().loading;

    view! {
        <div class="activity">
            {move || {
                activity
                    .get()
                    .contributions
                    .map(|total| {
                        view! {
                            <div class="activity__contributions">
                                {total} " contributions in the last year"
                            </div>
                        }
                    })
            }}
            {move || {
                activity
                    .get()
                    .error
                    .map(|message| view! { <div class="activity__error">{message}</div> })
            }}
            {move || {
                (activity.get().source == ActivitySource::Cache)
                    .then(|| view! { <div class="activity__stale">"showing cached activity"</div> })
            }}
            <ul class="activity__events">
                {move || {
                    activity
                        .get()
                        .events
                        .iter()
                        .map(|event| {
                            let kind = event.kind.clone();
                            let repo = event.repo.clone();
                            let when = event.created_at.clone();
                            view! {
                                <li class="activity__event">
                                    <span class="activity__kind">{kind}</span>
                                    <span class="activity__repo">{repo}</span>
                                    <span class="activity__when">{when}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="activity__pager">
                <button
                    class="btn"
                    disabled=prev_disabled
                    on:click=move |_| {
                        let page = activity.get_untracked().page.saturating_sub(1).max(1);
                        fetch_page(page);
                    }
                >
                    "newer"
                </button>
                <span class="activity__page">"page " {move || activity.get().page}</span>
                <button
                    class="btn"
                    disabled=next_disabled
                    on:click=move |_| {
                        let page = activity.get_untracked().page + 1;
                        fetch_page(page);
                    }
                >
                    "older"
                </button>
            </div>
        </div>
    }
}
