//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{StaticSegment, components::{Route, Router, Routes}};

use crate::pages::home::HomePage;
use crate::state::activity::ActivityState;
use crate::state::chat::ChatState;
use crate::state::records::SiteRecords;
use crate::state::terminal::TerminalState;
use crate::state::widgets::WidgetRegistry;
use crate::util::theme::{self, ThemePrefs};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up routing. The widget
/// registry is the only cross-component mutable state; everything mutates it
/// through its methods.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let registry = RwSignal::new(WidgetRegistry::default());
    let chat = RwSignal::new(ChatState::default());
    let activity = RwSignal::new(ActivityState::default());
    let terminal = RwSignal::new(TerminalState::default());
    let site = RwSignal::new(SiteRecords::default());
    let prefs = RwSignal::new(ThemePrefs::default());

    provide_context(registry);
    provide_context(chat);
    provide_context(activity);
    provide_context(terminal);
    provide_context(site);
    provide_context(prefs);

    // Restore the persisted theme once the browser is in charge.
    Effect::new(move || {
        let stored = theme::load();
        theme::apply(&stored);
        prefs.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/site.css"/>
        <Title text="Jan Fischer — software engineer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
