//! Dock: one toggle button per widget plus the theme switches.

use leptos::prelude::*;

use crate::state::widgets::{WidgetId, WidgetRegistry};
use crate::util::theme::{self, ThemePrefs};

const ACCENTS: &[&str] = &["#7ef9a2", "#7ec8f9", "#f9a27e"];

/// Fixed dock listing every widget; a button both opens and cycles its
/// widget through minimize/restore, mirroring the registry's toggle.
#[component]
pub fn Dock() -> impl IntoView {
    let registry = expect_context::<RwSignal<WidgetRegistry>>();
    let prefs = expect_context::<RwSignal<ThemePrefs>>();

    let set_theme = move |update: Box<dyn Fn(&mut ThemePrefs)>| {
        prefs.update(|p| update(p));
        theme::save(&prefs.get_untracked());
    };

    view! {
        <nav class="dock">
            {WidgetId::ALL
                .iter()
                .map(|&id| {
                    view! {
                        <button
                            class="dock__button"
                            class:dock__button--open=move || registry.get().is_open(id)
                            class:dock__button--minimized=move || registry.get().is_minimized(id)
                            on:click=move |_| registry.update(|r| r.toggle(id))
                        >
                            {id.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <span class="dock__spacer"></span>
            <button
                class="dock__button dock__button--theme"
                title="toggle dark mode"
                on:click=move |_| set_theme(Box::new(|p| p.dark = !p.dark))
            >
                {move || if prefs.get().dark { "light" } else { "dark" }}
            </button>
            {ACCENTS
                .iter()
                .map(|&color| {
                    view! {
                        <button
                            class="dock__swatch"
                            style:background=color
                            title="accent color"
                            on:click=move |_| set_theme(Box::new(move |p| p.accent = color.to_owned()))
                        ></button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
