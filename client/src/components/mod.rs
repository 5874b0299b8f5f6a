//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and widget surfaces while reading/writing
//! shared state from Leptos context providers. Widget panels are mounted
//! inside `floating_window`; the page sections stand alone.

pub mod activity_panel;
pub mod arcade_panel;
pub mod chat_panel;
pub mod coding_stats;
pub mod comments;
pub mod contact_form;
pub mod dock;
pub mod floating_window;
pub mod guestbook;
pub mod site_counters;
pub mod skill_map_panel;
pub mod terminal_panel;
pub mod testimonials;
