//! Theme preference: dark mode plus an accent color, persisted across
//! sessions in `localStorage`.
//!
//! Reads the stored preference on startup, falling back to the system
//! `prefers-color-scheme` for dark mode. Applying sets a class on `<html>`
//! and the `--accent` custom property.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "site_theme";
const DEFAULT_ACCENT: &str = "#7ef9a2";

/// Persisted theme preference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub dark: bool,
    pub accent: String,
}

impl Default for ThemePrefs {
    fn default() -> Self {
        Self { dark: false, accent: DEFAULT_ACCENT.to_owned() }
    }
}

/// Load the stored preference, or derive one from the system color scheme.
#[must_use]
pub fn load() -> ThemePrefs {
    if let Some(prefs) = storage::load_json::<ThemePrefs>(STORAGE_KEY) {
        return prefs;
    }
    ThemePrefs { dark: system_prefers_dark(), ..ThemePrefs::default() }
}

/// Persist and apply a preference.
pub fn save(prefs: &ThemePrefs) {
    storage::save_json(STORAGE_KEY, prefs);
    apply(prefs);
}

/// Apply the preference to the document: `.dark-mode` class and the
/// `--accent` custom property.
pub fn apply(prefs: &ThemePrefs) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if prefs.dark {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
            if let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = html.style().set_property("--accent", &prefs.accent);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
