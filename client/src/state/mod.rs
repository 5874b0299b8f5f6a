//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`widgets`, `chat`, `activity`, etc.) so
//! individual components can depend on small focused models. Each model is a
//! plain struct held in an `RwSignal` provided via context from `app`.

pub mod activity;
pub mod chat;
pub mod records;
pub mod terminal;
pub mod widgets;
