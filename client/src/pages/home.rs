//! The single-page portfolio: static sections, record-backed sections, the
//! dock, and the floating widget layer.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_panel::ActivityPanel;
use crate::components::arcade_panel::ArcadePanel;
use crate::components::chat_panel::ChatPanel;
use crate::components::coding_stats::CodingStatsSection;
use crate::components::comments::CommentsSection;
use crate::components::contact_form::ContactSection;
use crate::components::dock::Dock;
use crate::components::floating_window::FloatingWindow;
use crate::components::guestbook::GuestbookSection;
use crate::components::site_counters::SiteCounters;
use crate::components::skill_map_panel::SkillMapPanel;
use crate::components::terminal_panel::TerminalPanel;
use crate::components::testimonials::TestimonialsSection;
use crate::content;
use crate::state::records::SiteRecords;
use crate::state::widgets::{WidgetId, WidgetRegistry};

/// Closed dispatch from widget identifier to its window. The match is
/// exhaustive: adding a widget without a window is a compile error.
fn widget_window(id: WidgetId) -> AnyView {
    match id {
        WidgetId::Chat => view! {
            <FloatingWindow id=id init_width=380.0 init_height=460.0>
                <ChatPanel/>
            </FloatingWindow>
        }
        .into_any(),
        WidgetId::Activity => view! {
            <FloatingWindow id=id init_width=460.0 init_height=420.0>
                <ActivityPanel/>
            </FloatingWindow>
        }
        .into_any(),
        WidgetId::Terminal => view! {
            <FloatingWindow id=id init_width=520.0 init_height=360.0>
                <TerminalPanel/>
            </FloatingWindow>
        }
        .into_any(),
        WidgetId::SkillMap => view! {
            <FloatingWindow id=id init_width=420.0 init_height=380.0>
                <SkillMapPanel/>
            </FloatingWindow>
        }
        .into_any(),
        WidgetId::Arcade => view! {
            <FloatingWindow id=id init_width=520.0 init_height=520.0>
                <ArcadePanel/>
            </FloatingWindow>
        }
        .into_any(),
    }
}

/// Home page.
#[component]
pub fn HomePage() -> impl IntoView {
    let registry = expect_context::<RwSignal<WidgetRegistry>>();
    let site = expect_context::<RwSignal<SiteRecords>>();

    // One-shot startup: open the live feed and hydrate the record lists.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use records::LiveEvent;

            use crate::net::{api, live};

            live::connect(site);
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(list) = api::fetch_comments().await {
                    site.update(|s| {
                        for comment in list {
                            s.apply_event(LiveEvent::CommentAdded { comment });
                        }
                    });
                }
                if let Ok(list) = api::fetch_guestbook().await {
                    site.update(|s| {
                        for entry in list {
                            s.apply_event(LiveEvent::GuestbookAdded { entry });
                        }
                    });
                }
                if let Ok(list) = api::fetch_testimonials().await {
                    site.update(|s| {
                        for testimonial in list {
                            s.apply_event(LiveEvent::TestimonialAdded { testimonial });
                        }
                    });
                }
            });
        }
    });

    view! {
        <main class="home">
            <header class="hero">
                <h1>{content::SITE_NAME}</h1>
                <p class="hero__tagline">{content::TAGLINE}</p>
                <p class="hero__bio">{content::BIO}</p>
                <SiteCounters/>
            </header>

            <CodingStatsSection/>

            <section class="experience" id="experience">
                <h2>"Experience"</h2>
                {content::EXPERIENCE
                    .iter()
                    .map(|entry| {
                        view! {
                            <article class="experience__entry">
                                <h3>{entry.role} " · " {entry.company}</h3>
                                <span class="experience__period">{entry.period}</span>
                                <p>{entry.summary}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="projects" id="projects">
                <h2>"Projects"</h2>
                <ul class="projects__list">
                    {content::PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <li class="projects__item">
                                    <a href=project.url>{project.name}</a>
                                    <p>{project.description}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <TestimonialsSection/>
            <CommentsSection/>
            <GuestbookSection/>
            <ContactSection/>

            <footer class="footer">
                <p>"Built with floating windows and questionable ideas. Try the terminal."</p>
            </footer>

            <div class="windows-layer">
                <For
                    each=move || registry.get().stacking_order().to_vec()
                    key=|id| *id
                    children=widget_window
                />
            </div>

            <Dock/>
        </main>
    }
}
